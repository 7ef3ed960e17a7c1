use crate::{contact::Contact, core::store::ContactStore};

use super::query::ViewQuery;

/// Counts shown alongside the contact grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewSummary {
    /// Contacts in the store.
    pub total: usize,
    /// Favorited contacts in the store, regardless of the active filter.
    pub favorites: usize,
    /// Contacts in the current visible list.
    pub visible: usize,
}

/// Query parameters held between UI events.
///
/// Nothing is cached: every read re-derives from the store it is given.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    query: ViewQuery,
}

impl ViewState {
    /// State with an empty search and the favorites filter off.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current query parameters.
    pub fn query(&self) -> &ViewQuery {
        &self.query
    }

    /// Replaces the search text.
    pub fn set_search(&mut self, text: impl Into<String>) {
        self.query.search = text.into();
    }

    /// Sets the favorites-only flag.
    pub fn set_favorites_only(&mut self, favorites_only: bool) {
        self.query.favorites_only = favorites_only;
    }

    /// Flips the favorites-only flag and returns the new value.
    pub fn toggle_favorites_only(&mut self) -> bool {
        self.query.favorites_only = !self.query.favorites_only;
        self.query.favorites_only
    }

    /// Visible list for the current query.
    pub fn visible(&self, store: &ContactStore) -> Vec<Contact> {
        store.visible(&self.query)
    }

    /// Header counts for the current query.
    pub fn summary(&self, store: &ContactStore) -> ViewSummary {
        ViewSummary {
            total: store.len(),
            favorites: store.favorite_count(),
            visible: self.visible(store).len(),
        }
    }
}
