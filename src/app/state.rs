use std::collections::HashMap;
use std::hash::Hash;

use crate::domain::{
    ContentVersion, ContentVersionRequest, HistoryRequest, ItemDescriptor, RequestTicket,
    ServiceError, VersionNumber, VersionRecord,
};
use crate::infra::app_config::DEFAULT_ROWS_PER_PAGE;

use super::store::{Action, DialogAction, DialogKind};

/// Keyed lookup table plus the status of the request that filled it.
#[derive(Debug, Clone, PartialEq)]
pub struct EntityState<K: Eq + Hash, V> {
    pub by_id: HashMap<K, V>,
    pub is_fetching: bool,
    pub error: Option<ServiceError>,
}

impl<K: Eq + Hash, V> Default for EntityState<K, V> {
    fn default() -> Self {
        Self {
            by_id: HashMap::new(),
            is_fetching: false,
            error: None,
        }
    }
}

impl<K: Eq + Hash, V> EntityState<K, V> {
    /// Replaces the whole table. Later duplicates win.
    pub fn replace_all(&mut self, items: impl IntoIterator<Item = V>, key: impl Fn(&V) -> K) {
        self.by_id = create_lookup_table(items, key);
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        self.by_id.get(key)
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

pub fn create_lookup_table<K: Eq + Hash, V>(
    items: impl IntoIterator<Item = V>,
    key: impl Fn(&V) -> K,
) -> HashMap<K, V> {
    items.into_iter().map(|item| (key(&item), item)).collect()
}

/// The two versions picked for a diff. Either slot may be empty and both
/// may name the same version.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompareSelection {
    pub a: Option<VersionNumber>,
    pub b: Option<VersionNumber>,
}

impl CompareSelection {
    pub fn is_complete(&self) -> bool {
        self.a.is_some() && self.b.is_some()
    }

    pub fn is_self_comparison(&self) -> bool {
        self.is_complete() && self.a == self.b
    }
}

/// Partial update of a [`CompareSelection`].
///
/// The outer `Option` tells whether a slot is present in the update; a
/// present slot overwrites, including with `None` to clear it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComparePatch {
    pub a: Option<Option<VersionNumber>>,
    pub b: Option<Option<VersionNumber>>,
}

impl ComparePatch {
    pub fn a(version: impl Into<VersionNumber>) -> Self {
        Self {
            a: Some(Some(version.into())),
            b: None,
        }
    }

    pub fn b(version: impl Into<VersionNumber>) -> Self {
        Self {
            a: None,
            b: Some(Some(version.into())),
        }
    }

    pub fn both(a: impl Into<VersionNumber>, b: impl Into<VersionNumber>) -> Self {
        Self {
            a: Some(Some(a.into())),
            b: Some(Some(b.into())),
        }
    }

    pub fn apply_to(self, selection: &mut CompareSelection) {
        if let Some(a) = self.a {
            selection.a = a;
        }
        if let Some(b) = self.b {
            selection.b = b;
        }
    }
}

/// State of the version-history dialog.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryDialogState {
    pub open: bool,
    /// What is being listed; needed again for revert and refresh.
    pub request: Option<HistoryRequest>,
    pub item: Option<ItemDescriptor>,
    /// Newest version after the last successful fetch.
    pub current: Option<VersionNumber>,
    pub versions: EntityState<VersionNumber, VersionRecord>,
    /// Version numbers in the order the service listed them.
    pub order: Vec<VersionNumber>,
    pub page: usize,
    pub rows_per_page: usize,
    pub compare: CompareSelection,
    pub on_close: Option<Box<Action>>,
    pub on_dismiss: Option<Box<Action>>,
}

impl Default for HistoryDialogState {
    fn default() -> Self {
        Self::new(DEFAULT_ROWS_PER_PAGE)
    }
}

impl HistoryDialogState {
    pub fn new(rows_per_page: usize) -> Self {
        Self {
            open: false,
            request: None,
            item: None,
            current: None,
            versions: EntityState::default(),
            order: Vec::new(),
            page: 0,
            rows_per_page: rows_per_page.max(1),
            compare: CompareSelection::default(),
            on_close: None,
            on_dismiss: None,
        }
    }

    pub fn dismiss_action() -> Action {
        Action::Dialog(DialogAction::Close {
            kind: DialogKind::History,
            payload: None,
        })
    }

    pub fn is_fetching(&self) -> bool {
        self.versions.is_fetching
    }

    pub fn error(&self) -> Option<&ServiceError> {
        self.versions.error.as_ref()
    }
}

/// State of the single-version viewer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewVersionState {
    pub open: bool,
    pub request: Option<ContentVersionRequest>,
    pub version: Option<ContentVersion>,
    pub is_fetching: bool,
    pub error: Option<ServiceError>,
    pub on_close: Option<Box<Action>>,
}

/// Dialogs that only carry visibility and a close callback.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DialogSlot {
    pub open: bool,
    pub on_close: Option<Box<Action>>,
}

impl DialogSlot {
    /// Resets the slot and hands back its close callback.
    pub fn close(&mut self) -> Option<Box<Action>> {
        std::mem::take(self).on_close
    }
}

/// Tags requests so that late completions can be recognized.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequestTracker {
    current: RequestTicket,
}

impl RequestTracker {
    /// Starts a new dialog lifetime; anything issued before is stale.
    pub fn next_epoch(&mut self) {
        self.current = RequestTicket {
            epoch: self.current.epoch + 1,
            seq: 0,
        };
    }

    /// Issues a ticket that supersedes every earlier one in this epoch.
    pub fn issue(&mut self) -> RequestTicket {
        self.current.seq += 1;
        self.current
    }

    pub fn current(&self) -> RequestTicket {
        self.current
    }

    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        self.current == ticket
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DialogsState {
    pub history: HistoryDialogState,
    pub history_requests: RequestTracker,
    pub view_version: ViewVersionState,
    pub view_version_requests: RequestTracker,
    pub confirm: DialogSlot,
    pub publish: DialogSlot,
    pub delete: DialogSlot,
    pub new_content: DialogSlot,
}

/// Ambient session data shared by every dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    pub active_site: String,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            active_site: "default".to_string(),
        }
    }
}

/// All app state in one struct.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    pub session: SessionState,
    pub dialogs: DialogsState,
}

impl AppState {
    pub fn new(active_site: impl Into<String>, rows_per_page: usize) -> Self {
        Self {
            session: SessionState {
                active_site: active_site.into(),
            },
            dialogs: DialogsState {
                history: HistoryDialogState::new(rows_per_page),
                ..Default::default()
            },
        }
    }
}
