//! Post-payment confirmation view.

use maker_commerce::{Product, ProductId, SessionId};
use maker_records::RecordStore;

/// The confirmation screen's model, built from the provider's return-trip
/// query parameters.
///
/// The session token is taken from the URL and displayed without being
/// verified against the payment provider; confirmation is trusted entirely
/// from the redirect's presence. Known gap, kept by design.
#[derive(Debug, Clone, PartialEq)]
pub struct SuccessView {
    /// Provider-issued session token from the return URL.
    pub session_id: Option<SessionId>,
    /// Product id from the return URL.
    pub product_id: Option<ProductId>,
    /// The purchased record, when it can be found among creator records.
    /// Seed purchases render without product details.
    pub product: Option<Product>,
}

impl SuccessView {
    /// Build the view from the return URL's query string.
    pub fn from_query(query: &str, store: &RecordStore<Product>) -> Self {
        let params = parse_query(query);
        let session_id = param(&params, "session_id").map(SessionId::new);
        let product_id = param(&params, "product_id").map(ProductId::new);

        // Lookup is against creator records only.
        let product = product_id
            .as_ref()
            .and_then(|id| store.load().into_iter().find(|p| &p.id == id));

        Self {
            session_id,
            product_id,
            product,
        }
    }

    /// Whether the return trip carried a session token.
    pub fn is_confirmed(&self) -> bool {
        self.session_id.is_some()
    }

    /// Download URL for the purchased deliverable, when available.
    pub fn download_url(&self) -> Option<&str> {
        self.product.as_ref()?.file_url.as_deref()
    }
}

fn param(params: &[(String, String)], key: &str) -> Option<String> {
    params
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.clone())
        .filter(|v| !v.is_empty())
}

/// Parse a URL query string into decoded key/value pairs.
///
/// Accepts an optional leading `?`. Pairs without `=` parse as empty values.
pub fn parse_query(query: &str) -> Vec<(String, String)> {
    query
        .trim_start_matches('?')
        .split('&')
        .filter(|part| !part.is_empty())
        .map(|part| match part.split_once('=') {
            Some((k, v)) => (percent_decode(k), percent_decode(v)),
            None => (percent_decode(part), String::new()),
        })
        .collect()
}

fn percent_decode(s: &str) -> String {
    let bytes = s.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'%' if i + 2 < bytes.len() => {
                let hex = &s[i + 1..i + 3];
                if let Ok(byte) = u8::from_str_radix(hex, 16) {
                    out.push(byte);
                    i += 3;
                } else {
                    out.push(b'%');
                    i += 1;
                }
            }
            b'+' => {
                out.push(b' ');
                i += 1;
            }
            byte => {
                out.push(byte);
                i += 1;
            }
        }
    }
    String::from_utf8_lossy(&out).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use maker_commerce::{Category, UserId, PRODUCTS_KEY};
    use maker_records::MemoryBackend;

    fn store_with(products: &[Product]) -> RecordStore<Product> {
        let store = RecordStore::new(MemoryBackend::new(), PRODUCTS_KEY);
        store.save(products).unwrap();
        store
    }

    fn creator_product(id: &str) -> Product {
        let mut p = Product::new(
            "Rust for Systems Programmers",
            "A practical guide.",
            49.50,
            Category::Ebook,
            UserId::new("u1"),
        )
        .with_file_url("https://cdn.example.com/guide.pdf");
        p.id = id.into();
        p
    }

    #[test]
    fn test_parse_query() {
        let params = parse_query("?session_id=cs_123&product_id=prod_1");
        assert_eq!(
            params,
            vec![
                ("session_id".to_string(), "cs_123".to_string()),
                ("product_id".to_string(), "prod_1".to_string()),
            ]
        );
    }

    #[test]
    fn test_parse_query_decodes() {
        let params = parse_query("q=a+b%21&flag");
        assert_eq!(
            params,
            vec![
                ("q".to_string(), "a b!".to_string()),
                ("flag".to_string(), String::new()),
            ]
        );
    }

    #[test]
    fn test_found_creator_product() {
        let store = store_with(&[creator_product("prod_9")]);
        let view = SuccessView::from_query("?session_id=cs_123&product_id=prod_9", &store);

        assert!(view.is_confirmed());
        assert_eq!(view.product.as_ref().unwrap().id, ProductId::new("prod_9"));
        assert_eq!(
            view.download_url(),
            Some("https://cdn.example.com/guide.pdf")
        );
    }

    #[test]
    fn test_seed_product_renders_without_details() {
        // Seed ids never live in the record store, so the lookup misses and
        // the confirmation still renders.
        let store = store_with(&[]);
        let view = SuccessView::from_query("?session_id=cs_123&product_id=prod_1", &store);

        assert!(view.is_confirmed());
        assert_eq!(view.product_id, Some(ProductId::new("prod_1")));
        assert!(view.product.is_none());
        assert!(view.download_url().is_none());
    }

    #[test]
    fn test_no_session_token() {
        let store = store_with(&[]);
        let view = SuccessView::from_query("", &store);
        assert!(!view.is_confirmed());
        assert!(view.product.is_none());
    }
}
