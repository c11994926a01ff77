use super::HistoryApp;

impl HistoryApp {
    /// Folds every completion already queued. Returns whether any was found.
    pub fn poll_action_messages(&mut self) -> bool {
        let mut any = false;
        while let Ok(action) = self.action_rx.try_recv() {
            self.in_flight = self.in_flight.saturating_sub(1);
            self.dispatch(action);
            any = true;
        }
        any
    }

    /// Waits until every spawned task has reported back, including tasks
    /// spawned while folding earlier completions.
    pub async fn settle(&mut self) {
        while self.in_flight > 0 {
            let Some(action) = self.action_rx.recv().await else {
                break;
            };
            self.in_flight -= 1;
            self.dispatch(action);
        }
    }
}
