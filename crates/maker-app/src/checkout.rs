//! Hosted checkout handoff.

use crate::config::CheckoutConfig;
use crate::AppError;
use maker_auth::User;
use maker_commerce::{Money, Product};
use maker_data::{HttpTransport, Method, RequestBuilder};
use serde::Deserialize;

/// The provider's session-creation response, consumed for its redirect URL.
#[derive(Debug, Deserialize)]
struct ProviderSession {
    url: Option<String>,
}

/// Where the browser goes next: the provider's hosted payment page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutRedirect {
    /// Hosted checkout page URL.
    pub url: String,
}

/// Build the form-encoded session request for one product.
///
/// A single line item, quantity 1. The price crosses the checkout boundary
/// here: the exact decimal is rounded to integer cents.
pub fn session_request_form(
    product: &Product,
    user: &User,
    config: &CheckoutConfig,
) -> Vec<(String, String)> {
    let amount = Money::from_decimal(product.price);
    vec![
        ("payment_method_types[]".into(), "card".into()),
        (
            "line_items[0][price_data][currency]".into(),
            amount.currency_code().into(),
        ),
        (
            "line_items[0][price_data][product_data][name]".into(),
            product.title.clone(),
        ),
        (
            "line_items[0][price_data][product_data][description]".into(),
            product.description.clone(),
        ),
        (
            "line_items[0][price_data][unit_amount]".into(),
            amount.cents.to_string(),
        ),
        ("line_items[0][quantity]".into(), "1".into()),
        ("mode".into(), "payment".into()),
        ("success_url".into(), config.success_url(&product.id)),
        ("cancel_url".into(), config.cancel_url.clone()),
        ("customer_email".into(), user.email.clone()),
        ("allow_promotion_codes".into(), "true".into()),
        ("metadata[product_id]".into(), product.id.to_string()),
        ("metadata[user_id]".into(), user.id.to_string()),
    ]
}

/// Create a hosted checkout session and return the redirect.
///
/// A one-way handoff: once the caller navigates to the returned URL there is
/// no in-app pending state. Failure surfaces as a transient error; nothing
/// retries automatically.
pub async fn begin_checkout(
    product: &Product,
    user: &User,
    config: &CheckoutConfig,
    transport: &dyn HttpTransport,
) -> Result<CheckoutRedirect, AppError> {
    let fields = session_request_form(product, user, config);
    let request = RequestBuilder::new(Method::Post, config.endpoint.as_str())
        .bearer_auth(&config.secret_key)
        .form(&fields);

    let response = transport.send(request).await?.error_for_status()?;
    let session: ProviderSession = response.json()?;

    match session.url {
        Some(url) => Ok(CheckoutRedirect { url }),
        None => {
            tracing::error!(product_id = %product.id, "checkout session carried no redirect URL");
            Err(AppError::MissingRedirect)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use maker_commerce::{Category, UserId};
    use maker_data::{FetchError, Response};
    use std::sync::Mutex;

    struct CapturingTransport {
        status: u16,
        body: &'static str,
        last_request: Mutex<Option<RequestBuilder>>,
    }

    impl CapturingTransport {
        fn new(status: u16, body: &'static str) -> Self {
            Self {
                status,
                body,
                last_request: Mutex::new(None),
            }
        }
    }

    #[async_trait]
    impl HttpTransport for CapturingTransport {
        async fn send(&self, request: RequestBuilder) -> Result<Response, FetchError> {
            *self.last_request.lock().unwrap() = Some(request);
            Ok(Response::new(self.status, self.body.as_bytes().to_vec()))
        }
    }

    fn product(price: f64) -> Product {
        let mut p = Product::new(
            "Rust for Systems Programmers",
            "A practical guide.",
            price,
            Category::Ebook,
            UserId::new("creator_9"),
        );
        p.id = "prod_test".into();
        p
    }

    fn buyer() -> User {
        User::new(UserId::new("buyer_1"), "buyer@example.com")
    }

    fn config() -> CheckoutConfig {
        CheckoutConfig::new("sk_test_1", "https://store.example.com")
    }

    #[test]
    fn test_unit_amount_rounds_at_cent_boundary() {
        let fields = session_request_form(&product(19.999), &buyer(), &config());
        let amount = fields
            .iter()
            .find(|(k, _)| k == "line_items[0][price_data][unit_amount]")
            .map(|(_, v)| v.as_str());
        assert_eq!(amount, Some("2000"));
    }

    #[test]
    fn test_form_carries_identity_and_return_urls() {
        let fields = session_request_form(&product(49.50), &buyer(), &config());
        let get = |key: &str| {
            fields
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.as_str())
        };

        assert_eq!(get("customer_email"), Some("buyer@example.com"));
        assert_eq!(get("metadata[user_id]"), Some("buyer_1"));
        assert_eq!(get("metadata[product_id]"), Some("prod_test"));
        assert_eq!(get("line_items[0][quantity]"), Some("1"));
        assert_eq!(get("mode"), Some("payment"));
        assert_eq!(
            get("success_url"),
            Some("https://store.example.com/success?session_id={CHECKOUT_SESSION_ID}&product_id=prod_test")
        );
        assert_eq!(get("cancel_url"), Some("https://store.example.com"));
    }

    #[tokio::test]
    async fn test_begin_checkout_returns_redirect() {
        let transport =
            CapturingTransport::new(200, r#"{"url": "https://pay.example.com/c/sess_1"}"#);
        let redirect = begin_checkout(&product(49.50), &buyer(), &config(), &transport)
            .await
            .unwrap();
        assert_eq!(redirect.url, "https://pay.example.com/c/sess_1");

        let request = transport.last_request.lock().unwrap().take().unwrap();
        assert_eq!(request.method(), Method::Post);
        assert_eq!(
            request.headers().get("Authorization").map(String::as_str),
            Some("Bearer sk_test_1")
        );
        assert_eq!(
            request.headers().get("Content-Type").map(String::as_str),
            Some("application/x-www-form-urlencoded")
        );
    }

    #[tokio::test]
    async fn test_provider_error_surfaces() {
        let transport = CapturingTransport::new(402, "card declined");
        let err = begin_checkout(&product(10.0), &buyer(), &config(), &transport)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            AppError::Fetch(FetchError::HttpError { status: 402, .. })
        ));
    }

    #[tokio::test]
    async fn test_missing_url_surfaces() {
        let transport = CapturingTransport::new(200, r#"{}"#);
        let err = begin_checkout(&product(10.0), &buyer(), &config(), &transport)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::MissingRedirect));
    }
}
