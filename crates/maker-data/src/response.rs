//! HTTP response handling.

use crate::FetchError;
use serde::de::DeserializeOwned;

/// An HTTP response.
#[derive(Debug, Clone)]
pub struct Response {
    /// The HTTP status code.
    pub status: u16,
    /// The response body.
    pub body: Vec<u8>,
}

impl Response {
    /// Create a new response.
    pub fn new(status: u16, body: Vec<u8>) -> Self {
        Self { status, body }
    }

    /// Check if the response was successful (2xx status).
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Get the response body as text.
    pub fn text(&self) -> Result<String, FetchError> {
        String::from_utf8(self.body.clone())
            .map_err(|e| FetchError::ParseError(format!("Invalid UTF-8: {}", e)))
    }

    /// Parse the response body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, FetchError> {
        serde_json::from_slice(&self.body).map_err(|e| FetchError::ParseError(e.to_string()))
    }

    /// Convert to a Result, returning an error for non-2xx status codes.
    pub fn error_for_status(self) -> Result<Self, FetchError> {
        if self.is_success() {
            Ok(self)
        } else {
            let message = self.text().unwrap_or_else(|_| "Unknown error".to_string());
            Err(FetchError::HttpError {
                status: self.status,
                message,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_success() {
        assert!(Response::new(200, Vec::new()).is_success());
        assert!(Response::new(204, Vec::new()).is_success());
        assert!(!Response::new(302, Vec::new()).is_success());
        assert!(!Response::new(500, Vec::new()).is_success());
    }

    #[test]
    fn test_json_parse() {
        use serde::Deserialize;

        #[derive(Deserialize)]
        struct Session {
            url: String,
        }

        let resp = Response::new(200, br#"{"url": "https://pay.example.com/s/1"}"#.to_vec());
        let session: Session = resp.json().unwrap();
        assert_eq!(session.url, "https://pay.example.com/s/1");
    }

    #[test]
    fn test_error_for_status() {
        assert!(Response::new(200, b"ok".to_vec()).error_for_status().is_ok());

        let err = Response::new(402, b"payment required".to_vec())
            .error_for_status()
            .unwrap_err();
        match err {
            FetchError::HttpError { status, message } => {
                assert_eq!(status, 402);
                assert_eq!(message, "payment required");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
