//! Storefront view model.

use maker_commerce::{Catalog, CatalogPage, CatalogQuery, CategoryFilter};
use maker_events::{EventBus, Subscription, Topic};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// The browsing view over the merged catalog.
///
/// Subscribes to both catalog-change topics on mount and re-queries when
/// either fires; the subscriptions are released when the view is dropped
/// (unmounted). Search and category changes re-query immediately.
pub struct StorefrontView {
    catalog: Catalog,
    query: CatalogQuery,
    page: CatalogPage,
    stale: Arc<AtomicBool>,
    _created_sub: Subscription,
    _deleted_sub: Subscription,
}

impl StorefrontView {
    /// Mount the storefront over the shared catalog and bus.
    pub fn mount(catalog: Catalog, bus: &EventBus) -> Self {
        let stale = Arc::new(AtomicBool::new(false));

        let flag = Arc::clone(&stale);
        let created_sub = bus.subscribe(Topic::ProductCreated, move |_| {
            flag.store(true, Ordering::SeqCst);
        });
        let flag = Arc::clone(&stale);
        let deleted_sub = bus.subscribe(Topic::ProductDeleted, move |_| {
            flag.store(true, Ordering::SeqCst);
        });

        let query = CatalogQuery::new();
        let page = catalog.query(&query);
        Self {
            catalog,
            query,
            page,
            stale,
            _created_sub: created_sub,
            _deleted_sub: deleted_sub,
        }
    }

    /// Update the search text and re-query.
    pub fn set_search(&mut self, search: impl Into<String>) {
        self.query = std::mem::take(&mut self.query).with_search(search);
        self.refresh();
    }

    /// Update the category selector and re-query.
    pub fn set_category(&mut self, category: CategoryFilter) {
        self.query = std::mem::take(&mut self.query).with_category(category);
        self.refresh();
    }

    /// The current query.
    pub fn query(&self) -> &CatalogQuery {
        &self.query
    }

    /// The current two-tier result page, re-queried first if a catalog
    /// change event arrived since the last read.
    pub fn page(&mut self) -> &CatalogPage {
        if self.stale.swap(false, Ordering::SeqCst) {
            self.refresh();
        }
        &self.page
    }

    fn refresh(&mut self) {
        self.page = self.catalog.query(&self.query);
        self.stale.store(false, Ordering::SeqCst);
    }
}
