use crate::domain::{
    HistoryError, HistoryRequest, RequestTicket, ServiceError, VersionNumber, VersionsResponse,
};

use super::super::super::state::{AppState, HistoryDialogState};
use super::super::action::{Action, HistoryAction};
use super::super::command::Command;
use super::{drop_stale, invalid_transition};

pub fn reduce(state: &mut AppState, action: HistoryAction) -> Vec<Command> {
    match action {
        HistoryAction::Show { request, on_close } => {
            let dialogs = &mut state.dialogs;
            // Nothing cached for a previous item survives the new epoch.
            dialogs.history = HistoryDialogState {
                open: true,
                request: Some(request),
                on_close,
                on_dismiss: Some(Box::new(HistoryDialogState::dismiss_action())),
                ..HistoryDialogState::new(dialogs.history.rows_per_page)
            };
            dialogs.history_requests.next_epoch();
            Vec::new()
        }
        HistoryAction::FetchItemVersions(request) => {
            if !state.dialogs.history.open {
                return invalid_transition("fetch item versions while history dialog is closed");
            }
            begin_fetch(state, request)
        }
        HistoryAction::RevertContent(version) => {
            let history = &mut state.dialogs.history;
            if !history.open {
                return invalid_transition("revert while history dialog is closed");
            }
            let Some(path) = history.request.as_ref().map(|r| r.path.clone()) else {
                return invalid_transition("revert before any item was requested");
            };

            // A revert makes any listing in flight outdated.
            history.versions.is_fetching = false;
            let ticket = state.dialogs.history_requests.issue();

            vec![Command::RevertContent {
                ticket,
                site: state.session.active_site.clone(),
                path,
                version,
            }]
        }
        HistoryAction::CompareVersions(patch) => {
            patch.apply_to(&mut state.dialogs.history.compare);
            Vec::new()
        }
        HistoryAction::ChangePage(page) => {
            state.dialogs.history.page = page;
            Vec::new()
        }
    }
}

fn begin_fetch(state: &mut AppState, request: HistoryRequest) -> Vec<Command> {
    let history = &mut state.dialogs.history;
    history.versions.is_fetching = true;
    history.versions.error = None;
    history.request = Some(request.clone());

    let ticket = state.dialogs.history_requests.issue();
    vec![Command::FetchItemVersions {
        ticket,
        site: state.session.active_site.clone(),
        request,
    }]
}

pub fn complete_fetch(
    state: &mut AppState,
    ticket: RequestTicket,
    response: VersionsResponse,
) -> Vec<Command> {
    if !state.dialogs.history_requests.is_current(ticket) {
        return drop_stale(state.dialogs.history_requests.current(), ticket);
    }

    let history = &mut state.dialogs.history;
    let VersionsResponse { item, versions } = response;

    // An empty history clears the selection rather than keeping a key
    // that is no longer cached.
    history.current = versions.first().map(|v| v.version_number.clone());
    history.order = versions.iter().map(|v| v.version_number.clone()).collect();
    history
        .versions
        .replace_all(versions, |v| v.version_number.clone());
    history.item = Some(item);
    history.versions.is_fetching = false;
    Vec::new()
}

pub fn fail_fetch(state: &mut AppState, ticket: RequestTicket, error: ServiceError) -> Vec<Command> {
    if !state.dialogs.history_requests.is_current(ticket) {
        return drop_stale(state.dialogs.history_requests.current(), ticket);
    }

    log::warn!("{}", HistoryError::Fetch(error.clone()));
    let history = &mut state.dialogs.history;
    history.versions.error = Some(error);
    history.versions.is_fetching = false;
    Vec::new()
}

pub fn complete_revert(
    state: &mut AppState,
    ticket: RequestTicket,
    path: String,
    version: VersionNumber,
) -> Vec<Command> {
    let notify = Command::Notify(crate::infra::notify::Notification::info(format!(
        "Reverted {path} to version {version}"
    )));

    if !state.dialogs.history_requests.is_current(ticket) {
        let mut commands = drop_stale(state.dialogs.history_requests.current(), ticket);
        commands.push(notify);
        return commands;
    }

    let Some(request) = state.dialogs.history.request.clone() else {
        return vec![notify];
    };
    vec![
        notify,
        Command::Dispatch(Box::new(Action::History(HistoryAction::FetchItemVersions(
            request,
        )))),
    ]
}

/// Revert failures go to notifications whether or not the dialog is still
/// waiting; the history list itself is untouched.
pub fn fail_revert(path: String, version: VersionNumber, error: ServiceError) -> Vec<Command> {
    let err = HistoryError::Revert(error);
    log::warn!("{err} ({path} -> {version})");
    vec![Command::Notify(crate::infra::notify::Notification::error(
        err.to_string(),
    ))]
}
