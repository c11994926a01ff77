use crate::domain::{
    ContentVersion, ContentVersionRequest, HistoryError, RequestTicket, ServiceError,
};

use super::super::super::state::{AppState, ViewVersionState};
use super::super::action::ViewVersionAction;
use super::super::command::Command;
use super::{drop_stale, invalid_transition};

pub fn reduce(state: &mut AppState, action: ViewVersionAction) -> Vec<Command> {
    match action {
        ViewVersionAction::Show { request, on_close } => {
            state.dialogs.view_version = ViewVersionState {
                open: true,
                on_close,
                ..ViewVersionState::default()
            };
            state.dialogs.view_version_requests.next_epoch();
            begin_fetch(state, request)
        }
        ViewVersionAction::FetchContentVersion(request) => {
            if !state.dialogs.view_version.open {
                return invalid_transition("fetch content version while viewer is closed");
            }
            begin_fetch(state, request)
        }
    }
}

fn begin_fetch(state: &mut AppState, request: ContentVersionRequest) -> Vec<Command> {
    let view = &mut state.dialogs.view_version;
    view.is_fetching = true;
    view.error = None;
    view.request = Some(request.clone());

    let ticket = state.dialogs.view_version_requests.issue();
    vec![Command::FetchContentVersion {
        ticket,
        site: state.session.active_site.clone(),
        request,
    }]
}

pub fn complete_fetch(
    state: &mut AppState,
    ticket: RequestTicket,
    version: ContentVersion,
) -> Vec<Command> {
    if !state.dialogs.view_version_requests.is_current(ticket) {
        return drop_stale(state.dialogs.view_version_requests.current(), ticket);
    }

    let view = &mut state.dialogs.view_version;
    view.version = Some(version);
    view.is_fetching = false;
    Vec::new()
}

pub fn fail_fetch(state: &mut AppState, ticket: RequestTicket, error: ServiceError) -> Vec<Command> {
    if !state.dialogs.view_version_requests.is_current(ticket) {
        return drop_stale(state.dialogs.view_version_requests.current(), ticket);
    }

    log::warn!("{}", HistoryError::Fetch(error.clone()));
    let view = &mut state.dialogs.view_version;
    view.error = Some(error);
    view.is_fetching = false;
    Vec::new()
}
