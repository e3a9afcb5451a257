use super::{CatalogError, CatalogProvider};
use crate::filter::FilterItem;
use serde::Deserialize;
use std::path::PathBuf;

/// Accepted document shapes: a bare array, or the search API's envelope.
#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogDocument {
    Items(Vec<FilterItem>),
    Envelope {
        #[serde(rename = "filterItems")]
        filter_items: Vec<FilterItem>,
    },
}

/// Loads the catalog from a JSON file on disk.
pub struct FileCatalog {
    path: PathBuf,
}

impl FileCatalog {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl CatalogProvider for FileCatalog {
    fn fetch(&self) -> Result<Vec<FilterItem>, CatalogError> {
        let contents = std::fs::read_to_string(&self.path).map_err(|source| CatalogError::Read {
            path: self.path.clone(),
            source,
        })?;
        let document: CatalogDocument =
            serde_json::from_str(&contents).map_err(|source| CatalogError::Parse {
                path: self.path.clone(),
                source,
            })?;
        Ok(match document {
            CatalogDocument::Items(items) => items,
            CatalogDocument::Envelope { filter_items } => filter_items,
        })
    }
}
