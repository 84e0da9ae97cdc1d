//! Storefront domain types and catalog engine for makerstore.
//!
//! This crate provides the core types for a creator digital-goods
//! storefront:
//!
//! - **Catalog**: products, categories, the read-only seed catalog, and the
//!   merged catalog service backed by the local record store
//! - **Query**: case-insensitive search and category filtering with the
//!   featured/regular partition the storefront renders
//! - **Money**: minor-unit currency conversion for the checkout boundary
//!
//! # Example
//!
//! ```rust,ignore
//! use maker_commerce::prelude::*;
//! use maker_records::{MemoryBackend, RecordStore};
//!
//! let store = RecordStore::new(MemoryBackend::new(), PRODUCTS_KEY);
//! let catalog = Catalog::new(store);
//!
//! let page = catalog.query(
//!     &CatalogQuery::new()
//!         .with_search("rust")
//!         .with_category(CategoryFilter::Only(Category::Ebook)),
//! );
//! for product in page.featured.iter().chain(&page.regular) {
//!     println!("{} — ${}", product.title, product.price);
//! }
//! ```

pub mod catalog;
pub mod ids;
pub mod money;

pub use catalog::{
    seed_products, Catalog, CatalogPage, CatalogQuery, Category, CategoryFilter, Product,
    PRODUCTS_KEY,
};
pub use ids::{ProductId, SessionId, UserId};
pub use money::Money;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::catalog::{
        seed_products, Catalog, CatalogPage, CatalogQuery, Category, CategoryFilter, Product,
        PRODUCTS_KEY,
    };
    pub use crate::ids::{ProductId, SessionId, UserId};
    pub use crate::money::Money;
}
