//! Filter data model.
//!
//! Catalog types (`FilterItem`, `FilterOption`) are immutable input supplied
//! by a catalog provider. Selection types (`SelectedFilter`,
//! `SearchRequestFilter`) describe what the user picked and serialize to the
//! search request wire shape.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeSet;

/// A single checkbox option within a filter category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOption {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A filter category and its ordered options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterItem {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub options: Vec<FilterOption>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FilterType {
    #[default]
    Option,
}

/// The user's selection within one category.
///
/// `options_ids` is never empty inside a `SearchRequestFilter`; an entry that
/// loses its last option is dropped from the collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedFilter {
    pub id: String,
    #[serde(rename = "type", default)]
    pub kind: FilterType,
    #[serde(rename = "optionsIds")]
    pub options_ids: BTreeSet<String>,
}

impl SelectedFilter {
    pub fn new<I, S>(id: impl Into<String>, options_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id: id.into(),
            kind: FilterType::Option,
            options_ids: options_ids.into_iter().map(Into::into).collect(),
        }
    }

    pub fn contains(&self, option_id: &str) -> bool {
        self.options_ids.contains(option_id)
    }
}

/// Ordered collection of selections, unique by category id.
///
/// Equality is by value and ignores entry order.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct SearchRequestFilter {
    entries: Vec<SelectedFilter>,
}

impl SearchRequestFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SelectedFilter> {
        self.entries.iter()
    }

    pub fn entries(&self) -> &[SelectedFilter] {
        &self.entries
    }

    pub fn get(&self, filter_id: &str) -> Option<&SelectedFilter> {
        self.entries.iter().find(|f| f.id == filter_id)
    }

    pub fn position(&self, filter_id: &str) -> Option<usize> {
        self.entries.iter().position(|f| f.id == filter_id)
    }

    /// Sum of selected options across all categories.
    pub fn total_options(&self) -> usize {
        self.entries.iter().map(|f| f.options_ids.len()).sum()
    }

    pub fn to_pretty_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl From<Vec<SelectedFilter>> for SearchRequestFilter {
    fn from(entries: Vec<SelectedFilter>) -> Self {
        entries.into_iter().collect()
    }
}

/// Collecting normalizes: entries sharing an id are merged into the first
/// occurrence, and entries left without options are dropped.
impl FromIterator<SelectedFilter> for SearchRequestFilter {
    fn from_iter<T: IntoIterator<Item = SelectedFilter>>(iter: T) -> Self {
        let mut entries: Vec<SelectedFilter> = Vec::new();
        for entry in iter {
            match entries.iter_mut().find(|e| e.id == entry.id) {
                Some(existing) => existing.options_ids.extend(entry.options_ids),
                None => entries.push(entry),
            }
        }
        entries.retain(|e| !e.options_ids.is_empty());
        Self { entries }
    }
}

impl<'a> IntoIterator for &'a SearchRequestFilter {
    type Item = &'a SelectedFilter;
    type IntoIter = std::slice::Iter<'a, SelectedFilter>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl PartialEq for SearchRequestFilter {
    fn eq(&self, other: &Self) -> bool {
        self.entries.len() == other.entries.len()
            && self
                .entries
                .iter()
                .all(|e| other.get(&e.id).is_some_and(|o| o == e))
    }
}

impl Eq for SearchRequestFilter {}

impl<'de> Deserialize<'de> for SearchRequestFilter {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Vec::<SelectedFilter>::deserialize(deserializer).map(Self::from)
    }
}
