//! Filter selection domain: data model, the staged-selection reducer and the
//! committed filter store.

pub mod model;
pub mod reducer;
pub mod store;

pub use model::{FilterItem, FilterOption, SearchRequestFilter, SelectedFilter};
pub use store::FilterStore;
