//! HTTP request plumbing for makerstore's hosted collaborators.
//!
//! Provides a request builder with JSON and form-encoded bodies, a response
//! wrapper with status helpers, and an async [`HttpTransport`] trait so call
//! sites can take a test double instead of a live network stack.
//!
//! # Example
//!
//! ```rust,ignore
//! use maker_data::{HttpTransport, Method, RequestBuilder};
//!
//! let request = RequestBuilder::new(Method::Post, "https://pay.example.com/v1/sessions")
//!     .bearer_auth(secret_key)
//!     .form(&[("mode", "payment"), ("line_items[0][quantity]", "1")]);
//!
//! let session: Session = transport.send(request).await?.error_for_status()?.json()?;
//! ```

mod error;
mod request;
mod response;

pub use error::FetchError;
pub use request::{Method, RequestBuilder};
pub use response::Response;

use async_trait::async_trait;

/// Something that can carry a request to the network and bring back a
/// response.
///
/// The live implementation belongs to the host shell; tests substitute a
/// canned double.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Send the request and return the response.
    async fn send(&self, request: RequestBuilder) -> Result<Response, FetchError>;
}

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{FetchError, HttpTransport, Method, RequestBuilder, Response};
}
