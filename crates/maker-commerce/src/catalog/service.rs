//! Merged catalog service.

use crate::catalog::{seed_products, CatalogPage, CatalogQuery, Product};
use maker_records::RecordStore;

/// Storage key for creator-submitted product records.
pub const PRODUCTS_KEY: &str = "creator_products";

/// The queryable catalog: seed records plus the record store's content.
///
/// The working set is always `seed ++ stored`, in that order, with creator
/// records in insertion order. A failed store read degrades to seed-only
/// results; the store itself masks that failure as an empty sequence.
#[derive(Clone)]
pub struct Catalog {
    store: RecordStore<Product>,
}

impl Catalog {
    /// Create a catalog over the given product store.
    pub fn new(store: RecordStore<Product>) -> Self {
        Self { store }
    }

    /// The merged working set, unfiltered.
    pub fn all(&self) -> Vec<Product> {
        let mut products = seed_products();
        products.extend(self.store.load());
        products
    }

    /// Run a filter/search query and partition the result for display.
    pub fn query(&self, query: &CatalogQuery) -> CatalogPage {
        let matched = self
            .all()
            .into_iter()
            .filter(|product| query.matches(product))
            .collect();
        CatalogPage::partition(matched)
    }
}
