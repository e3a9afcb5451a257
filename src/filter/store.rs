//! Committed filter store.
//!
//! Holds the last confirmed `SearchRequestFilter` for the lifetime of the
//! page. `FilterStore` is a cheap handle; clones share the same state and
//! listener list. Every write replaces the whole collection and then notifies
//! listeners synchronously, in subscription order.

use crate::filter::model::SearchRequestFilter;
use crate::filter::reducer;
use std::cell::RefCell;
use std::collections::BTreeSet;
use std::rc::{Rc, Weak};

type Listener = Rc<RefCell<dyn FnMut(&SearchRequestFilter)>>;

#[derive(Default)]
struct StoreInner {
    filters: SearchRequestFilter,
    revision: u64,
    listeners: Vec<(u64, Listener)>,
    next_listener_id: u64,
}

#[derive(Clone, Default)]
pub struct FilterStore {
    inner: Rc<RefCell<StoreInner>>,
}

/// Handle returned by [`FilterStore::subscribe`].
///
/// Dropping it leaves the listener attached; call `unsubscribe` to detach.
#[must_use = "keep the subscription to be able to unsubscribe later"]
pub struct Subscription {
    id: u64,
    store: Weak<RefCell<StoreInner>>,
}

impl Subscription {
    /// Detach the listener. Returns false if it was already gone.
    pub fn unsubscribe(self) -> bool {
        let Some(inner) = self.store.upgrade() else {
            return false;
        };
        let mut inner = inner.borrow_mut();
        let before = inner.listeners.len();
        inner.listeners.retain(|(id, _)| *id != self.id);
        inner.listeners.len() != before
    }
}

impl FilterStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_filters(&self) -> SearchRequestFilter {
        self.inner.borrow().filters.clone()
    }

    /// Borrow the committed value without cloning it.
    pub fn with_filters<R>(&self, f: impl FnOnce(&SearchRequestFilter) -> R) -> R {
        f(&self.inner.borrow().filters)
    }

    /// Number of replacements since the store was created.
    pub fn revision(&self) -> u64 {
        self.inner.borrow().revision
    }

    pub fn set_filters(&self, filters: SearchRequestFilter) {
        {
            let mut inner = self.inner.borrow_mut();
            inner.filters = filters;
            inner.revision += 1;
            tracing::debug!(
                revision = inner.revision,
                entries = inner.filters.len(),
                "committed filters replaced"
            );
        }
        self.notify();
    }

    pub fn reset_filters(&self) {
        self.set_filters(SearchRequestFilter::new());
    }

    /// Replace one category's options directly on committed state, bypassing
    /// staging. An empty `option_ids` removes the category.
    pub fn update_filter_option<I, S>(&self, filter_id: &str, option_ids: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let option_ids: BTreeSet<String> = option_ids.into_iter().map(Into::into).collect();
        let next = self.with_filters(|current| reducer::replace_options(current, filter_id, option_ids));
        self.set_filters(next);
    }

    /// Register a listener called after every replacement.
    ///
    /// Listeners may read the store but must not write to it.
    pub fn subscribe(&self, listener: impl FnMut(&SearchRequestFilter) + 'static) -> Subscription {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_listener_id;
        inner.next_listener_id += 1;
        let listener: Listener = Rc::new(RefCell::new(listener));
        inner.listeners.push((id, listener));
        Subscription {
            id,
            store: Rc::downgrade(&self.inner),
        }
    }

    fn notify(&self) {
        // Snapshot both so listeners can call back into the store.
        let (snapshot, listeners): (SearchRequestFilter, Vec<Listener>) = {
            let inner = self.inner.borrow();
            (
                inner.filters.clone(),
                inner.listeners.iter().map(|(_, l)| Rc::clone(l)).collect(),
            )
        };
        for listener in listeners {
            (&mut *listener.borrow_mut())(&snapshot);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::model::SelectedFilter;
    use std::cell::Cell;

    fn price_cheap() -> SearchRequestFilter {
        SearchRequestFilter::from(vec![SelectedFilter::new("price", ["cheap"])])
    }

    #[test]
    fn test_starts_empty() {
        let store = FilterStore::new();
        assert!(store.get_filters().is_empty());
        assert_eq!(store.revision(), 0);
    }

    #[test]
    fn test_set_and_reset() {
        let store = FilterStore::new();
        store.set_filters(price_cheap());
        assert_eq!(store.get_filters(), price_cheap());
        store.reset_filters();
        assert!(store.get_filters().is_empty());
        assert_eq!(store.revision(), 2);
    }

    #[test]
    fn test_clones_share_state() {
        let store = FilterStore::new();
        let reader = store.clone();
        store.set_filters(price_cheap());
        assert_eq!(reader.get_filters(), price_cheap());
    }

    #[test]
    fn test_listeners_see_new_value_in_order() {
        let store = FilterStore::new();
        let seen = Rc::new(RefCell::new(Vec::new()));

        let first = Rc::clone(&seen);
        let _a = store.subscribe(move |f| first.borrow_mut().push(("a", f.len())));
        let second = Rc::clone(&seen);
        let _b = store.subscribe(move |f| second.borrow_mut().push(("b", f.len())));

        store.set_filters(price_cheap());
        assert_eq!(*seen.borrow(), vec![("a", 1), ("b", 1)]);
    }

    #[test]
    fn test_listener_can_read_store() {
        let store = FilterStore::new();
        let reader = store.clone();
        let observed = Rc::new(Cell::new(0));
        let sink = Rc::clone(&observed);
        let _sub = store.subscribe(move |_| sink.set(reader.get_filters().total_options()));

        store.set_filters(price_cheap());
        assert_eq!(observed.get(), 1);
    }

    #[test]
    fn test_unsubscribe_stops_notifications() {
        let store = FilterStore::new();
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let sub = store.subscribe(move |_| counter.set(counter.get() + 1));

        store.set_filters(price_cheap());
        assert!(sub.unsubscribe());
        store.reset_filters();

        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_every_write_notifies_and_bumps_revision() {
        let store = FilterStore::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let _sub = store.subscribe(move |f| sink.borrow_mut().push(f.clone()));

        store.set_filters(price_cheap());
        assert_eq!(store.revision(), 1);
        store.update_filter_option("price", ["mid"]);
        assert_eq!(store.revision(), 2);
        store.reset_filters();
        assert_eq!(store.revision(), 3);

        assert_eq!(
            *seen.borrow(),
            vec![
                price_cheap(),
                SearchRequestFilter::from(vec![SelectedFilter::new("price", ["mid"])]),
                SearchRequestFilter::new(),
            ]
        );
    }

    #[test]
    fn test_unsubscribe_after_store_dropped() {
        let store = FilterStore::new();
        let sub = store.subscribe(|_| {});
        drop(store);
        assert!(!sub.unsubscribe());
    }

    #[test]
    fn test_update_filter_option() {
        let store = FilterStore::new();
        store.set_filters(price_cheap());

        store.update_filter_option("price", ["mid"]);
        assert_eq!(
            store.get_filters(),
            SearchRequestFilter::from(vec![SelectedFilter::new("price", ["mid"])])
        );

        store.update_filter_option("stars", ["5"]);
        assert_eq!(store.get_filters().len(), 2);

        store.update_filter_option("price", Vec::<String>::new());
        assert!(store.get_filters().get("price").is_none());
        assert_eq!(store.get_filters().len(), 1);
    }
}
