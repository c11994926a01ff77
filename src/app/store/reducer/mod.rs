pub mod async_handler;
pub mod dialogs;
pub mod history;
pub mod view_version;

use crate::domain::{HistoryError, RequestTicket};

use super::super::state::AppState;
use super::action::Action;
use super::command::Command;

pub fn reduce(state: &mut AppState, action: Action) -> Vec<Command> {
    match action {
        Action::History(action) => history::reduce(state, action),
        Action::ViewVersion(action) => view_version::reduce(state, action),
        Action::Dialog(action) => dialogs::reduce(state, action),
        Action::Async(action) => async_handler::reduce(state, action),
    }
}

/// Programmer error: fatal in debug builds, logged and ignored otherwise.
fn invalid_transition(what: &'static str) -> Vec<Command> {
    let err = HistoryError::InvalidTransition(what);
    if cfg!(debug_assertions) {
        panic!("{err}");
    }
    log::error!("{err}");
    Vec::new()
}

fn drop_stale(expected: RequestTicket, received: RequestTicket) -> Vec<Command> {
    log::debug!("{}", HistoryError::Consistency { expected, received });
    Vec::new()
}
