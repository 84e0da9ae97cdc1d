//! Application error types.

use thiserror::Error;

/// Errors surfaced by storefront flows.
///
/// Every variant maps to a transient user-visible notification; no error
/// state persists across a reload and no operation retries automatically.
#[derive(Error, Debug)]
pub enum AppError {
    /// A required form field is missing or unparseable.
    #[error("Validation error: {0}")]
    Validation(String),

    /// The auth collaborator failed or nobody is signed in.
    #[error(transparent)]
    Auth(#[from] maker_auth::AuthError),

    /// The file storage collaborator failed.
    #[error("Storage upload failed: {0}")]
    Storage(String),

    /// The hosted checkout collaborator failed.
    #[error(transparent)]
    Fetch(#[from] maker_data::FetchError),

    /// The realtime collaborator failed.
    #[error("Realtime service error: {0}")]
    Realtime(String),

    /// Writing the record store failed.
    #[error(transparent)]
    Store(#[from] maker_records::StoreError),

    /// The checkout session response carried no redirect URL.
    #[error("Checkout session missing redirect URL")]
    MissingRedirect,
}
