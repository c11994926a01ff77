//! Reducer-style state updates + side-effect commands.

mod action;
mod command;
mod reducer;
mod runtime;

pub use action::{
    Action, AsyncAction, DialogAction, DialogKind, HistoryAction, SimpleDialog, ViewVersionAction,
};
pub use command::Command;
pub use reducer::reduce;

use super::HistoryApp;

impl HistoryApp {
    pub fn dispatch(&mut self, action: Action) {
        log::debug!("dispatch {action:?}");
        let commands = reducer::reduce(&mut self.state, action);
        for command in commands {
            runtime::run(self, command);
        }
    }
}
