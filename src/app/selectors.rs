//! Read-only views over dialog state for the presentation layer.

use crate::domain::{VersionNumber, VersionRecord};

use super::state::HistoryDialogState;

/// Number of pages needed for the cached versions; at least one.
pub fn page_count(history: &HistoryDialogState) -> usize {
    history.order.len().div_ceil(history.rows_per_page.max(1)).max(1)
}

/// The page actually shown. `page` itself is not bounds checked, so a page
/// past the end renders the last one.
pub fn effective_page(history: &HistoryDialogState) -> usize {
    history.page.min(page_count(history) - 1)
}

/// Versions on the effective page, in service order.
pub fn visible_versions(history: &HistoryDialogState) -> Vec<&VersionRecord> {
    let rows = history.rows_per_page.max(1);
    history
        .order
        .iter()
        .skip(effective_page(history) * rows)
        .take(rows)
        .filter_map(|number| history.versions.get(number))
        .collect()
}

pub fn current_version(history: &HistoryDialogState) -> Option<&VersionRecord> {
    history
        .current
        .as_ref()
        .and_then(|number| history.versions.get(number))
}

/// Records selected for comparison, resolved against the cache. A slot
/// naming an uncached version resolves to `None`.
pub fn compare_records(
    history: &HistoryDialogState,
) -> (Option<&VersionRecord>, Option<&VersionRecord>) {
    let resolve =
        |slot: &Option<VersionNumber>| slot.as_ref().and_then(|n| history.versions.get(n));
    (resolve(&history.compare.a), resolve(&history.compare.b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::ComparePatch;
    use chrono::Utc;

    fn history_with(count: usize, rows_per_page: usize) -> HistoryDialogState {
        let mut history = HistoryDialogState::new(rows_per_page);
        let versions: Vec<VersionRecord> = (1..=count as u64)
            .rev()
            .map(|n| VersionRecord {
                version_number: VersionNumber::from(n),
                label: String::new(),
                edited_by: "admin".into(),
                edited_date: Utc::now(),
                comment: String::new(),
            })
            .collect();
        history.order = versions.iter().map(|v| v.version_number.clone()).collect();
        history.current = history.order.first().cloned();
        history
            .versions
            .replace_all(versions, |v| v.version_number.clone());
        history
    }

    fn numbers(records: &[&VersionRecord]) -> Vec<String> {
        records
            .iter()
            .map(|r| r.version_number.to_string())
            .collect()
    }

    #[test]
    fn pages_follow_service_order() {
        let mut history = history_with(5, 2);
        assert_eq!(page_count(&history), 3);
        assert_eq!(numbers(&visible_versions(&history)), vec!["5", "4"]);

        history.page = 2;
        assert_eq!(numbers(&visible_versions(&history)), vec!["1"]);
    }

    #[test]
    fn page_past_the_end_is_clamped() {
        let mut history = history_with(3, 2);
        history.page = 40;
        assert_eq!(effective_page(&history), 1);
        assert_eq!(numbers(&visible_versions(&history)), vec!["1"]);
    }

    #[test]
    fn empty_history_has_one_empty_page() {
        let history = HistoryDialogState::default();
        assert_eq!(page_count(&history), 1);
        assert!(visible_versions(&history).is_empty());
        assert!(current_version(&history).is_none());
    }

    #[test]
    fn compare_resolves_only_cached_versions() {
        let mut history = history_with(3, 10);
        ComparePatch::both("3", "7").apply_to(&mut history.compare);

        let (a, b) = compare_records(&history);
        assert_eq!(a.map(|r| r.version_number.as_str()), Some("3"));
        assert!(b.is_none());
        assert_eq!(
            current_version(&history).map(|r| r.version_number.as_str()),
            Some("3")
        );
    }
}
