use super::super::super::state::{AppState, HistoryDialogState};
use super::super::action::{Action, DialogAction, DialogKind, SimpleDialog};
use super::super::command::Command;

pub fn reduce(state: &mut AppState, action: DialogAction) -> Vec<Command> {
    match action {
        DialogAction::Show { dialog, on_close } => {
            let slot = match dialog {
                SimpleDialog::Confirm => &mut state.dialogs.confirm,
                SimpleDialog::Publish => &mut state.dialogs.publish,
                SimpleDialog::Delete => &mut state.dialogs.delete,
                SimpleDialog::NewContent => &mut state.dialogs.new_content,
            };
            slot.open = true;
            slot.on_close = on_close;
            Vec::new()
        }
        DialogAction::Close { kind, payload } => {
            let on_close = close(state, kind);
            [payload, on_close]
                .into_iter()
                .flatten()
                .map(Command::Dispatch)
                .collect()
        }
    }
}

/// Resets the dialog and returns its close callback for a single delivery.
fn close(state: &mut AppState, kind: DialogKind) -> Option<Box<Action>> {
    let dialogs = &mut state.dialogs;
    match kind {
        DialogKind::History => {
            let rows_per_page = dialogs.history.rows_per_page;
            let previous = std::mem::replace(
                &mut dialogs.history,
                HistoryDialogState::new(rows_per_page),
            );
            dialogs.history_requests.next_epoch();
            previous.on_close
        }
        DialogKind::ViewVersion => {
            let previous = std::mem::take(&mut dialogs.view_version);
            dialogs.view_version_requests.next_epoch();
            previous.on_close
        }
        DialogKind::Confirm => dialogs.confirm.close(),
        DialogKind::Publish => dialogs.publish.close(),
        DialogKind::Delete => dialogs.delete.close(),
        DialogKind::NewContent => dialogs.new_content.close(),
    }
}
