use crate::domain::{
    ContentVersion, ContentVersionRequest, HistoryRequest, RequestTicket, ServiceError,
    VersionNumber, VersionsResponse,
};

use super::super::state::ComparePatch;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    History(HistoryAction),
    ViewVersion(ViewVersionAction),
    Dialog(DialogAction),
    Async(AsyncAction),
}

#[derive(Debug, Clone, PartialEq)]
pub enum HistoryAction {
    /// Opens the dialog. Fetching is a separate intent.
    Show {
        request: HistoryRequest,
        on_close: Option<Box<Action>>,
    },
    FetchItemVersions(HistoryRequest),
    RevertContent(VersionNumber),
    CompareVersions(ComparePatch),
    ChangePage(usize),
}

#[derive(Debug, Clone, PartialEq)]
pub enum ViewVersionAction {
    /// Opens the viewer and loads the requested version.
    Show {
        request: ContentVersionRequest,
        on_close: Option<Box<Action>>,
    },
    FetchContentVersion(ContentVersionRequest),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DialogKind {
    History,
    ViewVersion,
    Confirm,
    Publish,
    Delete,
    NewContent,
}

/// Dialogs with no state besides visibility and a close callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SimpleDialog {
    Confirm,
    Publish,
    Delete,
    NewContent,
}

impl From<SimpleDialog> for DialogKind {
    fn from(dialog: SimpleDialog) -> Self {
        match dialog {
            SimpleDialog::Confirm => DialogKind::Confirm,
            SimpleDialog::Publish => DialogKind::Publish,
            SimpleDialog::Delete => DialogKind::Delete,
            SimpleDialog::NewContent => DialogKind::NewContent,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DialogAction {
    Show {
        dialog: SimpleDialog,
        on_close: Option<Box<Action>>,
    },
    /// Closes any dialog. `payload` is dispatched first, then the dialog's
    /// stored close callback.
    Close {
        kind: DialogKind,
        payload: Option<Box<Action>>,
    },
}

/// Completions sent back by runtime tasks.
#[derive(Debug, Clone, PartialEq)]
pub enum AsyncAction {
    FetchItemVersionsComplete {
        ticket: RequestTicket,
        response: VersionsResponse,
    },
    FetchItemVersionsFailed {
        ticket: RequestTicket,
        error: ServiceError,
    },
    RevertContentComplete {
        ticket: RequestTicket,
        path: String,
        version: VersionNumber,
    },
    RevertContentFailed {
        ticket: RequestTicket,
        path: String,
        version: VersionNumber,
        error: ServiceError,
    },
    FetchContentVersionComplete {
        ticket: RequestTicket,
        version: ContentVersion,
    },
    FetchContentVersionFailed {
        ticket: RequestTicket,
        error: ServiceError,
    },
}
