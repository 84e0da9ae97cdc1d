//! Product catalog module.
//!
//! Contains the product record, category enumeration, read-only seed
//! catalog, the filter/search query types, and the merged catalog service.

mod product;
mod query;
mod seed;
mod service;

pub use product::{Category, Product};
pub use query::{CatalogPage, CatalogQuery, CategoryFilter};
pub use seed::seed_products;
pub use service::{Catalog, PRODUCTS_KEY};
