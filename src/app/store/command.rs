use crate::domain::{ContentVersionRequest, HistoryRequest, RequestTicket, SiteId, VersionNumber};
use crate::infra::notify::Notification;

use super::action::Action;

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    FetchItemVersions {
        ticket: RequestTicket,
        site: SiteId,
        request: HistoryRequest,
    },
    RevertContent {
        ticket: RequestTicket,
        site: SiteId,
        path: String,
        version: VersionNumber,
    },
    FetchContentVersion {
        ticket: RequestTicket,
        site: SiteId,
        request: ContentVersionRequest,
    },
    /// Feed another action through the store.
    Dispatch(Box<Action>),
    Notify(Notification),
}
