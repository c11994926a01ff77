//! History dialog application: state, reducers and the async runtime.

mod polling;
mod root;
pub mod selectors;
pub mod state;
pub mod store;

pub use root::HistoryApp;
pub use state::{AppState, CompareSelection, ComparePatch, HistoryDialogState, ViewVersionState};
pub use store::{
    Action, AsyncAction, Command, DialogAction, DialogKind, HistoryAction, SimpleDialog,
    ViewVersionAction,
};
