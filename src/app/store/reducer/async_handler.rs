use super::super::super::state::AppState;
use super::super::action::AsyncAction;
use super::super::command::Command;
use super::{history, view_version};

pub fn reduce(state: &mut AppState, action: AsyncAction) -> Vec<Command> {
    match action {
        AsyncAction::FetchItemVersionsComplete { ticket, response } => {
            history::complete_fetch(state, ticket, response)
        }
        AsyncAction::FetchItemVersionsFailed { ticket, error } => {
            history::fail_fetch(state, ticket, error)
        }
        AsyncAction::RevertContentComplete {
            ticket,
            path,
            version,
        } => history::complete_revert(state, ticket, path, version),
        AsyncAction::RevertContentFailed {
            path,
            version,
            error,
            ..
        } => history::fail_revert(path, version, error),
        AsyncAction::FetchContentVersionComplete { ticket, version } => {
            view_version::complete_fetch(state, ticket, version)
        }
        AsyncAction::FetchContentVersionFailed { ticket, error } => {
            view_version::fail_fetch(state, ticket, error)
        }
    }
}
