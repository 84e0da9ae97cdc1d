//! Typed record store with fail-soft reads.

use crate::{RecordBackend, StoreError};
use serde::{de::DeserializeOwned, Serialize};
use std::marker::PhantomData;
use std::sync::Arc;

/// A typed store holding one sequence of records under a fixed key.
///
/// Reads fail soft: a missing, unreadable, or corrupt stored value loads as
/// an empty sequence and is never surfaced to the caller as an error. Writes
/// replace the entire stored sequence.
///
/// Cloning the store clones a handle to the same backend, so independently
/// mounted views observe each other's writes immediately.
pub struct RecordStore<T> {
    backend: Arc<dyn RecordBackend>,
    key: String,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Clone for RecordStore<T> {
    fn clone(&self) -> Self {
        Self {
            backend: Arc::clone(&self.backend),
            key: self.key.clone(),
            _marker: PhantomData,
        }
    }
}

impl<T> RecordStore<T>
where
    T: Serialize + DeserializeOwned,
{
    /// Create a store over the given backend and storage key.
    pub fn new(backend: impl RecordBackend + 'static, key: impl Into<String>) -> Self {
        Self {
            backend: Arc::new(backend),
            key: key.into(),
            _marker: PhantomData,
        }
    }

    /// The storage key this store reads and writes.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Load the stored sequence.
    ///
    /// Returns an empty vector if nothing is stored or the stored value
    /// cannot be read or parsed. Corruption is logged and masked, never
    /// propagated.
    pub fn load(&self) -> Vec<T> {
        let raw = match self.backend.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "record store read failed, treating as empty");
                return Vec::new();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(records) => records,
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "stored records corrupt, treating as empty");
                Vec::new()
            }
        }
    }

    /// Overwrite the stored sequence with the given records.
    pub fn save(&self, records: &[T]) -> Result<(), StoreError> {
        let raw = serde_json::to_string(records)?;
        self.backend.set(&self.key, &raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryBackend;
    use serde::Deserialize;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Record {
        id: String,
        value: i64,
    }

    fn record(id: &str, value: i64) -> Record {
        Record {
            id: id.to_string(),
            value,
        }
    }

    #[test]
    fn test_load_empty_when_absent() {
        let store: RecordStore<Record> = RecordStore::new(MemoryBackend::new(), "records");
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_save_then_load() {
        let store: RecordStore<Record> = RecordStore::new(MemoryBackend::new(), "records");
        let records = vec![record("a", 1), record("b", 2)];
        store.save(&records).unwrap();
        assert_eq!(store.load(), records);
    }

    #[test]
    fn test_save_overwrites() {
        let store: RecordStore<Record> = RecordStore::new(MemoryBackend::new(), "records");
        store.save(&[record("a", 1)]).unwrap();
        store.save(&[record("b", 2)]).unwrap();
        assert_eq!(store.load(), vec![record("b", 2)]);
    }

    #[test]
    fn test_corrupt_value_loads_empty() {
        let backend = MemoryBackend::new();
        backend.set("records", "not json at all").unwrap();
        let store: RecordStore<Record> = RecordStore::new(backend, "records");
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_save_load_roundtrip_is_stable() {
        let store: RecordStore<Record> = RecordStore::new(MemoryBackend::new(), "records");
        let records = vec![record("a", 1), record("b", 2), record("c", 3)];
        store.save(&records).unwrap();
        let loaded = store.load();
        store.save(&loaded).unwrap();
        assert_eq!(store.load(), loaded);
    }

    #[test]
    fn test_clones_share_backend() {
        let store: RecordStore<Record> = RecordStore::new(MemoryBackend::new(), "records");
        let other = store.clone();
        store.save(&[record("a", 1)]).unwrap();
        assert_eq!(other.load(), vec![record("a", 1)]);
    }
}
