use super::super::super::HistoryApp;
use super::super::action::{Action, AsyncAction};
use crate::domain::{HistoryRequest, RequestTicket, ServiceError, SiteId, VersionNumber};

pub fn fetch_item_versions(
    app: &mut HistoryApp,
    ticket: RequestTicket,
    site: SiteId,
    request: HistoryRequest,
) {
    let service = app.service.clone();

    let task = async move {
        let result = if request.config {
            service
                .list_configuration_versions(
                    &site,
                    &request.path,
                    request.environment.as_deref(),
                    request.module.as_deref(),
                )
                .await
        } else {
            service.list_versions(&site, &request.path).await
        };

        Action::Async(match result {
            Ok(response) => AsyncAction::FetchItemVersionsComplete { ticket, response },
            Err(error) => AsyncAction::FetchItemVersionsFailed { ticket, error },
        })
    };

    app.spawn(task, move |error: ServiceError| {
        Action::Async(AsyncAction::FetchItemVersionsFailed { ticket, error })
    });
}

/// Issues exactly one revert call; failures are reported, never retried.
pub fn revert_content(
    app: &mut HistoryApp,
    ticket: RequestTicket,
    site: SiteId,
    path: String,
    version: VersionNumber,
) {
    let service = app.service.clone();
    let (aborted_path, aborted_version) = (path.clone(), version.clone());

    let task = async move {
        Action::Async(match service.revert(&site, &path, &version).await {
            Ok(()) => AsyncAction::RevertContentComplete {
                ticket,
                path,
                version,
            },
            Err(error) => AsyncAction::RevertContentFailed {
                ticket,
                path,
                version,
                error,
            },
        })
    };

    app.spawn(task, move |error: ServiceError| {
        Action::Async(AsyncAction::RevertContentFailed {
            ticket,
            path: aborted_path,
            version: aborted_version,
            error,
        })
    });
}
