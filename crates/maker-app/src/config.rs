//! Application configuration.

use maker_commerce::ProductId;

/// Configuration for the hosted checkout collaborator.
#[derive(Debug, Clone)]
pub struct CheckoutConfig {
    /// Session-creation endpoint of the hosted provider.
    pub endpoint: String,
    /// Secret API key sent as a bearer token.
    pub secret_key: String,
    /// Origin the provider redirects back to.
    pub origin: String,
    /// Where a cancelled checkout returns to.
    pub cancel_url: String,
}

impl CheckoutConfig {
    /// Create a checkout configuration for the given key and origin.
    pub fn new(secret_key: impl Into<String>, origin: impl Into<String>) -> Self {
        let origin = origin.into();
        Self {
            endpoint: "https://api.stripe.com/v1/checkout/sessions".to_string(),
            secret_key: secret_key.into(),
            cancel_url: origin.clone(),
            origin,
        }
    }

    /// Override the session-creation endpoint.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Override the cancel return URL.
    pub fn with_cancel_url(mut self, url: impl Into<String>) -> Self {
        self.cancel_url = url.into();
        self
    }

    /// The success return URL for a product.
    ///
    /// Carries the product id plus the provider's session-token placeholder,
    /// which the provider substitutes on redirect.
    pub fn success_url(&self, product_id: &ProductId) -> String {
        format!(
            "{}/success?session_id={{CHECKOUT_SESSION_ID}}&product_id={}",
            self.origin, product_id
        )
    }
}

/// Top-level application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Application name.
    pub name: String,
    /// Realtime channel the community chat lives on.
    pub chat_channel: String,
    /// Hosted checkout settings.
    pub checkout: CheckoutConfig,
}

impl AppConfig {
    /// Create a configuration with the given name and checkout settings.
    pub fn new(name: impl Into<String>, checkout: CheckoutConfig) -> Self {
        Self {
            name: name.into(),
            chat_channel: "community-chat".to_string(),
            checkout,
        }
    }

    /// Override the chat channel name.
    pub fn with_chat_channel(mut self, channel: impl Into<String>) -> Self {
        self.chat_channel = channel.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_url_carries_product_and_session_placeholder() {
        let config = CheckoutConfig::new("sk_test_1", "https://store.example.com");
        let url = config.success_url(&ProductId::new("prod_42"));
        assert_eq!(
            url,
            "https://store.example.com/success?session_id={CHECKOUT_SESSION_ID}&product_id=prod_42"
        );
    }

    #[test]
    fn test_cancel_url_defaults_to_origin() {
        let config = CheckoutConfig::new("sk_test_1", "https://store.example.com");
        assert_eq!(config.cancel_url, "https://store.example.com");
    }

    #[test]
    fn test_app_config_defaults() {
        let config = AppConfig::new(
            "makerstore",
            CheckoutConfig::new("sk_test_1", "https://store.example.com"),
        );
        assert_eq!(config.chat_channel, "community-chat");
    }
}
