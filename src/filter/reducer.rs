//! Staged selection reducer.
//!
//! Pure transitions over `SearchRequestFilter`: every function takes the
//! current state by reference and returns a new value. Unknown category or
//! option ids are accepted as-is; nothing here consults the catalog.

use crate::filter::model::{SearchRequestFilter, SelectedFilter};
use std::collections::BTreeSet;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterAction {
    Toggle { filter_id: String, option_id: String },
    ClearAll,
    ResetAll,
}

pub fn reduce(state: &SearchRequestFilter, action: &FilterAction) -> SearchRequestFilter {
    match action {
        FilterAction::Toggle {
            filter_id,
            option_id,
        } => toggle_option(state, filter_id, option_id),
        FilterAction::ClearAll => clear_all(state),
        FilterAction::ResetAll => reset_all(state),
    }
}

/// Flip membership of `option_id` in category `filter_id`.
///
/// A missing category is appended with just this option. A category whose
/// last option is toggled off is removed; otherwise it keeps its position.
pub fn toggle_option(
    state: &SearchRequestFilter,
    filter_id: &str,
    option_id: &str,
) -> SearchRequestFilter {
    let Some(existing) = state.get(filter_id) else {
        let mut entries = state.entries().to_vec();
        entries.push(SelectedFilter::new(filter_id, [option_id]));
        return SearchRequestFilter::from(entries);
    };

    let mut options_ids = existing.options_ids.clone();
    if !options_ids.remove(option_id) {
        options_ids.insert(option_id.to_string());
    }
    replace_options(state, filter_id, options_ids)
}

/// Replace the options of one category, dropping the entry when `options_ids`
/// is empty and appending it when the category is not yet selected.
pub fn replace_options(
    state: &SearchRequestFilter,
    filter_id: &str,
    options_ids: BTreeSet<String>,
) -> SearchRequestFilter {
    let mut entries = state.entries().to_vec();
    match state.position(filter_id) {
        Some(_) if options_ids.is_empty() => entries.retain(|f| f.id != filter_id),
        Some(idx) => entries[idx].options_ids = options_ids,
        None if options_ids.is_empty() => {}
        None => entries.push(SelectedFilter::new(filter_id, options_ids)),
    }
    SearchRequestFilter::from(entries)
}

pub fn clear_all(_state: &SearchRequestFilter) -> SearchRequestFilter {
    SearchRequestFilter::new()
}

// Same outcome as `clear_all`: staged selections are emptied, not restored to
// the committed ones.
pub fn reset_all(_state: &SearchRequestFilter) -> SearchRequestFilter {
    SearchRequestFilter::new()
}

pub fn is_selected(state: &SearchRequestFilter, filter_id: &str, option_id: &str) -> bool {
    state
        .get(filter_id)
        .is_some_and(|f| f.contains(option_id))
}
