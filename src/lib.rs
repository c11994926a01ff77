pub mod app;
pub mod domain;
pub mod infra;

pub use app::{Action, HistoryApp};
pub use domain::{HistoryRequest, ServiceError, VersionNumber, VersionRecord};
