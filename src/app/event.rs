use crate::filter::FilterItem;
use crossterm::event::Event as CrosstermEvent;

#[derive(Debug)]
pub enum AppEvent {
    /// Terminal input event
    Terminal(CrosstermEvent),

    /// Catalog provider finished
    CatalogLoaded(Vec<FilterItem>),
    CatalogFailed(String),

    /// Committed filters were replaced
    FiltersChanged {
        entries: usize,
        options: usize,
    },

    /// Tick for UI refresh
    Tick,
}
