//! Root application struct owning the dialog state.

use std::future::Future;
use std::sync::Arc;

use tokio::sync::mpsc;

use crate::domain::{HistoryRequest, ServiceError};
use crate::infra::app_config::AppConfig;
use crate::infra::notify::Notifier;
use crate::infra::version_service::VersionService;

use super::state::AppState;
use super::store::{Action, HistoryAction};

/// Single owner of [`AppState`].
///
/// State changes only through [`HistoryApp::dispatch`]. Service calls run on
/// spawned tasks that report back on `action_tx`; their completions are
/// folded when the channel is polled, in arrival order.
pub struct HistoryApp {
    pub state: AppState,

    pub service: Arc<dyn VersionService>,
    pub notifier: Arc<dyn Notifier>,

    pub action_tx: mpsc::Sender<Action>,
    pub action_rx: mpsc::Receiver<Action>,

    /// Spawned tasks whose completion has not been received yet.
    pub(super) in_flight: usize,
}

impl HistoryApp {
    pub fn new(
        state: AppState,
        service: Arc<dyn VersionService>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        let (action_tx, action_rx) = mpsc::channel(32);
        Self {
            state,
            service,
            notifier,
            action_tx,
            action_rx,
            in_flight: 0,
        }
    }

    pub fn from_config(
        config: &AppConfig,
        service: Arc<dyn VersionService>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self::new(
            AppState::new(config.active_site.clone(), config.rows_per_page),
            service,
            notifier,
        )
    }

    /// Opens the history dialog and requests its versions.
    pub fn open_history(&mut self, request: HistoryRequest, on_close: Option<Action>) {
        self.dispatch(Action::History(HistoryAction::Show {
            request: request.clone(),
            on_close: on_close.map(Box::new),
        }));
        self.dispatch(Action::History(HistoryAction::FetchItemVersions(request)));
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    /// Runs `task` on the tokio runtime and queues the action it yields.
    ///
    /// If the task panics or is cancelled, `on_abort` builds the action to
    /// queue instead, so every spawn reports back exactly once.
    pub(crate) fn spawn<F, A>(&mut self, task: F, on_abort: A)
    where
        F: Future<Output = Action> + Send + 'static,
        A: FnOnce(ServiceError) -> Action + Send + 'static,
    {
        let action_tx = self.action_tx.clone();
        self.in_flight += 1;

        tokio::spawn(async move {
            let action = match tokio::spawn(task).await {
                Ok(action) => action,
                Err(err) => {
                    log::error!("Service task aborted: {err}");
                    on_abort(ServiceError::Transport {
                        status: None,
                        message: format!("service task aborted: {err}"),
                    })
                }
            };
            if action_tx.send(action).await.is_err() {
                log::warn!("Dropping completion: action channel closed");
            }
        });
    }
}
