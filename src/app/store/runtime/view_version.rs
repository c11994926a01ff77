use super::super::super::HistoryApp;
use super::super::action::{Action, AsyncAction};
use crate::domain::{ContentVersionRequest, RequestTicket, ServiceError, SiteId};

pub fn fetch_content_version(
    app: &mut HistoryApp,
    ticket: RequestTicket,
    site: SiteId,
    request: ContentVersionRequest,
) {
    let service = app.service.clone();

    let task = async move {
        let result = service
            .get_version(&site, &request.path, &request.version_number)
            .await;

        Action::Async(match result {
            Ok(version) => AsyncAction::FetchContentVersionComplete { ticket, version },
            Err(error) => AsyncAction::FetchContentVersionFailed { ticket, error },
        })
    };

    app.spawn(task, move |error: ServiceError| {
        Action::Async(AsyncAction::FetchContentVersionFailed { ticket, error })
    });
}
