//! File storage collaborator boundary.

use crate::AppError;
use async_trait::async_trait;
use maker_commerce::UserId;
use std::time::{SystemTime, UNIX_EPOCH};

/// A stored object, as reported by the storage service.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredObject {
    /// Publicly resolvable URL of the uploaded object.
    pub public_url: String,
}

/// The external file storage service.
///
/// Consumed up to twice per product creation: once for the deliverable file,
/// once for the optional cover image.
#[async_trait]
pub trait StorageClient: Send + Sync {
    /// Upload bytes to a path, returning the public URL.
    async fn upload(&self, bytes: &[u8], path: &str, upsert: bool)
        -> Result<StoredObject, AppError>;
}

/// Storage path for a product's deliverable file.
pub fn product_file_path(user_id: &UserId, file_name: &str) -> String {
    format!("products/{}/{}-{}", user_id, now_millis(), file_name)
}

/// Storage path for a product's cover image.
pub fn product_image_path(user_id: &UserId, file_name: &str) -> String {
    format!("product-images/{}/{}-{}", user_id, now_millis(), file_name)
}

fn now_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0)
}
