//! Storefront flows and view models for makerstore.
//!
//! The glue between the domain crates and the outside world:
//!
//! - **Upload**: the creator upload flow state machine
//! - **Storefront / Dashboard**: event-synchronized views over the shared
//!   record store
//! - **Checkout / Success**: the hosted-payment handoff and the return-trip
//!   confirmation
//! - **Chat**: the realtime community chat pass-through
//! - **App**: the shell that owns the shared bus, store, and configuration
//!
//! External services (auth, file storage, realtime, hosted checkout) are
//! consumed through collaborator traits so every flow can run against test
//! doubles.

mod app;
mod chat;
mod checkout;
mod config;
mod dashboard;
mod error;
mod storage;
mod storefront;
mod success;
mod upload;

pub use app::{App, View};
pub use chat::{ChatMessage, ChatPanel, PresenceEntry, RealtimeClient, RealtimeEnvelope};
pub use checkout::{begin_checkout, session_request_form, CheckoutRedirect};
pub use config::{AppConfig, CheckoutConfig};
pub use dashboard::{DashboardStats, DashboardView};
pub use error::AppError;
pub use storage::{product_file_path, product_image_path, StorageClient, StoredObject};
pub use storefront::StorefrontView;
pub use success::{parse_query, SuccessView};
pub use upload::{FileAttachment, ProductDraft, UploadFlow, UploadState};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::app::{App, View};
    pub use crate::chat::{ChatMessage, ChatPanel, RealtimeClient};
    pub use crate::checkout::{begin_checkout, CheckoutRedirect};
    pub use crate::config::{AppConfig, CheckoutConfig};
    pub use crate::dashboard::{DashboardStats, DashboardView};
    pub use crate::error::AppError;
    pub use crate::storage::{StorageClient, StoredObject};
    pub use crate::storefront::StorefrontView;
    pub use crate::success::SuccessView;
    pub use crate::upload::{FileAttachment, ProductDraft, UploadFlow, UploadState};
}
