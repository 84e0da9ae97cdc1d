//! Auth error types.

use thiserror::Error;

/// Errors surfaced by the auth collaborator.
#[derive(Error, Debug)]
pub enum AuthError {
    /// No identity is signed in.
    #[error("Not signed in")]
    NotSignedIn,

    /// The collaborator call failed.
    #[error("Auth service error: {0}")]
    ServiceError(String),
}
