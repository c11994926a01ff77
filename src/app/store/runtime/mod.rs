pub mod history;
pub mod view_version;


use super::super::HistoryApp;
use super::command::Command;

pub fn run(app: &mut HistoryApp, command: Command) {
    match command {
        Command::FetchItemVersions {
            ticket,
            site,
            request,
        } => history::fetch_item_versions(app, ticket, site, request),
        Command::RevertContent {
            ticket,
            site,
            path,
            version,
        } => history::revert_content(app, ticket, site, path, version),
        Command::FetchContentVersion {
            ticket,
            site,
            request,
        } => view_version::fetch_content_version(app, ticket, site, request),
        Command::Dispatch(action) => app.dispatch(*action),
        Command::Notify(notification) => app.notifier.notify(notification),
    }
}
