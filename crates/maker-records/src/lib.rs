//! Local record persistence for makerstore.
//!
//! Provides a typed record store over a simple string key-value backend with
//! automatic JSON serialization. The backend is a trait so the browser-style
//! persistent store can be swapped for an in-memory double in tests without
//! touching call sites.
//!
//! # Example
//!
//! ```rust,ignore
//! use maker_records::{MemoryBackend, RecordStore};
//!
//! let store: RecordStore<Product> = RecordStore::new(MemoryBackend::new(), "creator_products");
//!
//! // Overwrite the whole stored sequence
//! store.save(&products)?;
//!
//! // A missing or corrupt value reads back as empty, never as an error
//! let products = store.load();
//! ```

mod backend;
mod error;
mod store;

pub use backend::{FileBackend, MemoryBackend, RecordBackend};
pub use error::StoreError;
pub use store::RecordStore;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{FileBackend, MemoryBackend, RecordBackend, RecordStore, StoreError};
}
