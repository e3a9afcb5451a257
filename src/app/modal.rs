//! Filter modal state: the staged selection, the option cursor and the
//! confirmation gate that sits between "Apply" and the commit.

use crate::filter::reducer::{self, FilterAction};
use crate::filter::{FilterItem, FilterStore, SearchRequestFilter};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GateState {
    #[default]
    Closed,
    Open,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GateButton {
    #[default]
    Cancel,
    Confirm,
}

/// Yes/no prompt shown before staged filters are committed.
///
/// Only `Closed -> Open` (request) and `Open -> Closed` (confirm or cancel)
/// are valid; anything else is ignored and reported as `false`.
#[derive(Debug, Default)]
pub struct ConfirmGate {
    state: GateState,
    focused: GateButton,
}

impl ConfirmGate {
    pub fn is_open(&self) -> bool {
        self.state == GateState::Open
    }

    pub fn focused(&self) -> GateButton {
        self.focused
    }

    pub fn request(&mut self) -> bool {
        if self.is_open() {
            return false;
        }
        self.state = GateState::Open;
        self.focused = GateButton::default();
        true
    }

    pub fn confirm(&mut self) -> bool {
        self.close()
    }

    pub fn cancel(&mut self) -> bool {
        self.close()
    }

    pub fn toggle_focus(&mut self) {
        self.focused = match self.focused {
            GateButton::Cancel => GateButton::Confirm,
            GateButton::Confirm => GateButton::Cancel,
        };
    }

    fn close(&mut self) -> bool {
        let was_open = self.is_open();
        self.state = GateState::Closed;
        was_open
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyOutcome {
    AwaitingConfirmation,
    Committed,
    Ignored,
}

/// Position of a selectable option in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionRow {
    pub category: usize,
    pub option: usize,
}

/// Flatten the catalog into its selectable rows, in display order.
pub fn option_rows(catalog: &[FilterItem]) -> Vec<OptionRow> {
    catalog
        .iter()
        .enumerate()
        .flat_map(|(category, item)| {
            (0..item.options.len()).map(move |option| OptionRow { category, option })
        })
        .collect()
}

#[derive(Debug, Default)]
pub struct FilterModal {
    pub visible: bool,
    pub cursor: usize,
    pub gate: ConfirmGate,
    staged: SearchRequestFilter,
}

impl FilterModal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open with a fresh staged copy of the committed filters.
    pub fn open(&mut self, store: &FilterStore) {
        self.staged = store.get_filters();
        self.cursor = 0;
        self.gate = ConfirmGate::default();
        self.visible = true;
        tracing::debug!(staged = self.staged.len(), "filter modal opened");
    }

    /// Discard staged edits and close.
    pub fn cancel(&mut self, store: &FilterStore) {
        self.staged = store.get_filters();
        self.gate.cancel();
        self.visible = false;
        tracing::debug!("filter modal cancelled");
    }

    pub fn staged(&self) -> &SearchRequestFilter {
        &self.staged
    }

    pub fn is_selected(&self, filter_id: &str, option_id: &str) -> bool {
        reducer::is_selected(&self.staged, filter_id, option_id)
    }

    pub fn dispatch(&mut self, action: FilterAction) {
        self.staged = reducer::reduce(&self.staged, &action);
    }

    pub fn toggle(&mut self, filter_id: &str, option_id: &str) {
        self.dispatch(FilterAction::Toggle {
            filter_id: filter_id.to_string(),
            option_id: option_id.to_string(),
        });
    }

    pub fn clear_all(&mut self) {
        self.dispatch(FilterAction::ClearAll);
    }

    pub fn reset_all(&mut self) {
        self.dispatch(FilterAction::ResetAll);
    }

    /// Toggle the option under the cursor. Returns false when the catalog has
    /// no option at that position.
    pub fn toggle_at_cursor(&mut self, catalog: &[FilterItem]) -> bool {
        let Some(row) = option_rows(catalog).get(self.cursor).copied() else {
            return false;
        };
        let item = &catalog[row.category];
        let option = &item.options[row.option];
        self.toggle(&item.id, &option.id);
        true
    }

    /// Route an apply request. With confirmation required the gate opens and
    /// nothing is committed yet; otherwise staged filters are committed now.
    pub fn request_apply(&mut self, store: &FilterStore, confirm_required: bool) -> ApplyOutcome {
        if !self.visible {
            return ApplyOutcome::Ignored;
        }
        if !confirm_required {
            self.commit(store);
            return ApplyOutcome::Committed;
        }
        if self.gate.request() {
            tracing::debug!("apply confirmation requested");
            ApplyOutcome::AwaitingConfirmation
        } else {
            ApplyOutcome::Ignored
        }
    }

    /// Confirm a pending apply: commit staged filters and close everything.
    pub fn confirm_apply(&mut self, store: &FilterStore) -> bool {
        if !self.gate.confirm() {
            return false;
        }
        self.commit(store);
        true
    }

    /// Dismiss the confirmation prompt; staged edits stay in place.
    pub fn cancel_confirm(&mut self) -> bool {
        self.gate.cancel()
    }

    pub fn move_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_down(&mut self, total: usize) {
        if self.cursor + 1 < total {
            self.cursor += 1;
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self, total: usize) {
        self.cursor = total.saturating_sub(1);
    }

    fn commit(&mut self, store: &FilterStore) {
        tracing::info!(
            entries = self.staged.len(),
            options = self.staged.total_options(),
            "applying staged filters"
        );
        store.set_filters(self.staged.clone());
        self.visible = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::{FilterOption, SelectedFilter};

    fn catalog() -> Vec<FilterItem> {
        let opt = |id: &str| FilterOption {
            id: id.into(),
            name: id.into(),
            description: None,
        };
        vec![
            FilterItem {
                id: "price".into(),
                name: "Price".into(),
                description: None,
                options: vec![opt("cheap"), opt("mid")],
            },
            FilterItem {
                id: "meal".into(),
                name: "Meal".into(),
                description: None,
                options: vec![opt("bb")],
            },
        ]
    }

    fn committed_price_cheap() -> FilterStore {
        let store = FilterStore::new();
        store.set_filters(SearchRequestFilter::from(vec![SelectedFilter::new("price", ["cheap"])]));
        store
    }

    #[test]
    fn test_gate_transitions() {
        let mut gate = ConfirmGate::default();
        assert!(!gate.is_open());
        assert!(!gate.confirm());
        assert!(!gate.cancel());

        assert!(gate.request());
        assert!(!gate.request(), "no re-entry while open");
        assert!(gate.confirm());
        assert!(!gate.is_open());

        assert!(gate.request());
        assert!(gate.cancel());
        assert!(!gate.is_open());
    }

    #[test]
    fn test_gate_focus_resets_on_request() {
        let mut gate = ConfirmGate::default();
        gate.request();
        gate.toggle_focus();
        assert_eq!(gate.focused(), GateButton::Confirm);
        gate.cancel();
        gate.request();
        assert_eq!(gate.focused(), GateButton::Cancel);
    }

    #[test]
    fn test_option_rows_skip_headers() {
        let rows = option_rows(&catalog());
        assert_eq!(
            rows,
            vec![
                OptionRow { category: 0, option: 0 },
                OptionRow { category: 0, option: 1 },
                OptionRow { category: 1, option: 0 },
            ]
        );
    }

    #[test]
    fn test_open_seeds_staged_from_committed() {
        let store = committed_price_cheap();
        let mut modal = FilterModal::new();
        modal.open(&store);
        assert!(modal.visible);
        assert_eq!(modal.staged(), &store.get_filters());
    }

    #[test]
    fn test_cancel_leaves_committed_untouched() {
        let store = committed_price_cheap();
        let before = store.get_filters();
        let mut modal = FilterModal::new();

        modal.open(&store);
        modal.toggle("meal", "bb");
        assert!(modal.is_selected("meal", "bb"));
        modal.cancel(&store);

        assert!(!modal.visible);
        assert_eq!(store.get_filters(), before);
        assert_eq!(modal.staged(), &before);
    }

    #[test]
    fn test_apply_confirm_commits_staged() {
        let store = FilterStore::new();
        let mut modal = FilterModal::new();

        modal.open(&store);
        modal.toggle("price", "mid");
        assert_eq!(modal.request_apply(&store, true), ApplyOutcome::AwaitingConfirmation);
        assert!(store.get_filters().is_empty(), "nothing committed before confirm");

        let staged = modal.staged().clone();
        assert!(modal.confirm_apply(&store));
        assert_eq!(store.get_filters(), staged);
        assert!(!modal.visible);
        assert!(!modal.gate.is_open());
    }

    #[test]
    fn test_cancel_confirm_keeps_modal_and_staged() {
        let store = FilterStore::new();
        let mut modal = FilterModal::new();
        modal.open(&store);
        modal.toggle("price", "mid");
        modal.request_apply(&store, true);

        assert!(modal.cancel_confirm());
        assert!(modal.visible);
        assert!(modal.is_selected("price", "mid"));
        assert!(store.get_filters().is_empty());
        assert!(!modal.confirm_apply(&store));
    }

    #[test]
    fn test_apply_without_confirmation() {
        let store = FilterStore::new();
        let mut modal = FilterModal::new();
        modal.open(&store);
        modal.toggle("meal", "bb");
        assert_eq!(modal.request_apply(&store, false), ApplyOutcome::Committed);
        assert!(reducer::is_selected(&store.get_filters(), "meal", "bb"));
        assert!(!modal.visible);
    }

    #[test]
    fn test_apply_when_closed_is_ignored() {
        let store = FilterStore::new();
        let mut modal = FilterModal::new();
        assert_eq!(modal.request_apply(&store, true), ApplyOutcome::Ignored);
        assert_eq!(store.revision(), 0);
    }

    #[test]
    fn test_clear_and_reset_empty_staged_only() {
        let store = committed_price_cheap();
        let mut modal = FilterModal::new();
        modal.open(&store);
        modal.clear_all();
        assert!(modal.staged().is_empty());
        modal.toggle("meal", "bb");
        modal.reset_all();
        assert!(modal.staged().is_empty());
        assert_eq!(store.get_filters().len(), 1);
    }

    #[test]
    fn test_cursor_navigation_and_toggle() {
        let store = FilterStore::new();
        let catalog = catalog();
        let total = option_rows(&catalog).len();
        let mut modal = FilterModal::new();
        modal.open(&store);

        modal.move_up();
        assert_eq!(modal.cursor, 0);
        modal.move_down(total);
        assert!(modal.toggle_at_cursor(&catalog));
        assert!(modal.is_selected("price", "mid"));

        modal.move_end(total);
        modal.move_down(total);
        assert_eq!(modal.cursor, 2);
        assert!(modal.toggle_at_cursor(&catalog));
        assert!(modal.is_selected("meal", "bb"));

        modal.move_home();
        assert_eq!(modal.cursor, 0);
        assert!(!modal.toggle_at_cursor(&[]));
    }
}
