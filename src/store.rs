//! Catalog View Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Each catalog
//! section owns one store; nothing here is global.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::filter::CategoryFilter;

/// Transient view state of the scam catalog
#[derive(Clone, Debug, Default, Store)]
pub struct CatalogView {
    /// Selected category tab
    pub filter: CategoryFilter,
    /// Search box contents
    pub query: String,
    /// "Show more" pressed since the last filter change
    pub show_all: bool,
    /// Record shown in the detail modal
    pub selected: Option<u32>,
}

/// Type alias for the store
pub type CatalogStore = Store<CatalogView>;

pub fn new_catalog_store() -> CatalogStore {
    Store::new(CatalogView::default())
}

// ========================
// Store Helper Functions
// ========================

/// Switch category tab. Collapses the list back to the display cap.
pub fn store_set_filter(store: &CatalogStore, filter: CategoryFilter) {
    if store.filter().get_untracked() == filter {
        return;
    }
    tracing::debug!(category = filter.key(), "catalog filter changed");
    store.filter().set(filter);
    store.show_all().set(false);
}

/// Replace the search query. Collapses the list back to the display cap.
pub fn store_set_query(store: &CatalogStore, query: String) {
    if store.query().with_untracked(|current| *current == query) {
        return;
    }
    tracing::debug!(query = %query, "catalog query changed");
    store.query().set(query);
    store.show_all().set(false);
}

/// Reset tab and query
pub fn store_clear_filters(store: &CatalogStore) {
    store_set_filter(store, CategoryFilter::All);
    store_set_query(store, String::new());
}

/// Lift the display cap until the next filter change
pub fn store_show_more(store: &CatalogStore) {
    store.show_all().set(true);
}

pub fn store_open_detail(store: &CatalogStore, scam_id: u32) {
    tracing::debug!(scam_id, "detail opened");
    store.selected().set(Some(scam_id));
}

pub fn store_close_detail(store: &CatalogStore) {
    if store.selected().get_untracked().is_some() {
        tracing::debug!("detail closed");
        store.selected().set(None);
    }
}

/// Window keydown: Escape closes the detail, other keys are ignored
pub fn store_handle_key(store: &CatalogStore, key: &str) {
    if key == "Escape" {
        store_close_detail(store);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_store(test: impl FnOnce(CatalogStore)) {
        let owner = Owner::new();
        owner.set();
        test(new_catalog_store());
    }

    #[test]
    fn test_filter_change_resets_show_all() {
        with_store(|store| {
            store_show_more(&store);
            assert!(store.show_all().get_untracked());

            store_set_filter(&store, CategoryFilter::Only("defi"));
            assert_eq!(store.filter().get_untracked(), CategoryFilter::Only("defi"));
            assert!(!store.show_all().get_untracked());
        });
    }

    #[test]
    fn test_query_change_resets_show_all() {
        with_store(|store| {
            store_show_more(&store);
            store_set_query(&store, "seed".to_string());
            assert_eq!(store.query().get_untracked(), "seed");
            assert!(!store.show_all().get_untracked());
        });
    }

    #[test]
    fn test_same_filter_keeps_expansion() {
        with_store(|store| {
            store_show_more(&store);
            store_set_filter(&store, CategoryFilter::All);
            store_set_query(&store, String::new());
            assert!(store.show_all().get_untracked());
        });
    }

    #[test]
    fn test_clear_filters() {
        with_store(|store| {
            store_set_filter(&store, CategoryFilter::Only("nft"));
            store_set_query(&store, "mint".to_string());
            store_clear_filters(&store);
            assert_eq!(store.filter().get_untracked(), CategoryFilter::All);
            assert!(store.query().get_untracked().is_empty());
        });
    }

    #[test]
    fn test_detail_open_close() {
        with_store(|store| {
            store_open_detail(&store, 20);
            assert_eq!(store.selected().get_untracked(), Some(20));
            store_close_detail(&store);
            assert_eq!(store.selected().get_untracked(), None);
        });
    }

    #[test]
    fn test_only_escape_closes_detail() {
        with_store(|store| {
            store_open_detail(&store, 7);
            store_handle_key(&store, "Enter");
            assert_eq!(store.selected().get_untracked(), Some(7));
            store_handle_key(&store, "Escape");
            assert_eq!(store.selected().get_untracked(), None);
        });
    }
}
