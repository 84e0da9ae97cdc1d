//! Catalog filter and search query types.

use crate::catalog::{Category, Product};
use serde::{Deserialize, Serialize};

/// Category selection for a catalog query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CategoryFilter {
    /// The "all" sentinel: no category constraint.
    #[default]
    All,
    /// Exact-equality match on one category.
    Only(Category),
}

impl CategoryFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryFilter::All => "all",
            CategoryFilter::Only(category) => category.as_str(),
        }
    }

    /// Parse a selector value; "all" is the sentinel, anything else must be
    /// a valid category.
    pub fn from_str(s: &str) -> Option<Self> {
        if s.eq_ignore_ascii_case("all") {
            Some(CategoryFilter::All)
        } else {
            Category::from_str(s).map(CategoryFilter::Only)
        }
    }

    /// Whether a product's category passes this filter.
    pub fn matches(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(selected) => *selected == category,
        }
    }
}

/// A catalog query: free-text search plus a category filter.
///
/// Search is a case-insensitive substring match against title OR
/// description; empty text matches everything.
#[derive(Debug, Clone, Default)]
pub struct CatalogQuery {
    search: String,
    category: CategoryFilter,
}

impl CatalogQuery {
    /// Create a query matching everything.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the search text.
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    /// Set the category filter.
    pub fn with_category(mut self, category: CategoryFilter) -> Self {
        self.category = category;
        self
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn category(&self) -> CategoryFilter {
        self.category
    }

    /// Whether a product passes both the search and the category filter.
    pub fn matches(&self, product: &Product) -> bool {
        self.matches_search(product) && self.category.matches(product.category)
    }

    fn matches_search(&self, product: &Product) -> bool {
        if self.search.is_empty() {
            return true;
        }
        let needle = self.search.to_lowercase();
        product.title.to_lowercase().contains(&needle)
            || product.description.to_lowercase().contains(&needle)
    }
}

/// A filtered catalog partitioned for two-tier display.
///
/// Both tiers preserve the relative order of the filtered result, which is
/// itself the original insertion order; there is no ranking.
#[derive(Debug, Clone, Default)]
pub struct CatalogPage {
    /// Featured products, rendered in the top tier.
    pub featured: Vec<Product>,
    /// Everything else.
    pub regular: Vec<Product>,
}

impl CatalogPage {
    /// Partition filtered products into the two display tiers.
    pub fn partition(products: Vec<Product>) -> Self {
        let (featured, regular) = products.into_iter().partition(|p| p.featured);
        Self { featured, regular }
    }

    /// Total products across both tiers.
    pub fn total(&self) -> usize {
        self.featured.len() + self.regular.len()
    }

    /// Check if nothing matched.
    pub fn is_empty(&self) -> bool {
        self.featured.is_empty() && self.regular.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::UserId;

    fn product(title: &str, description: &str, category: Category, featured: bool) -> Product {
        Product::new(title, description, 10.0, category, UserId::new("u1")).with_featured(featured)
    }

    #[test]
    fn test_category_filter_parse() {
        assert_eq!(CategoryFilter::from_str("all"), Some(CategoryFilter::All));
        assert_eq!(
            CategoryFilter::from_str("ebook"),
            Some(CategoryFilter::Only(Category::Ebook))
        );
        assert_eq!(CategoryFilter::from_str("music"), None);
    }

    #[test]
    fn test_empty_search_matches_everything() {
        let query = CatalogQuery::new();
        let p = product("Anything", "at all", Category::Video, false);
        assert!(query.matches(&p));
    }

    #[test]
    fn test_search_is_case_insensitive_on_title_or_description() {
        let p = product(
            "Rust for Systems Programmers",
            "A practical guide.",
            Category::Ebook,
            false,
        );

        assert!(CatalogQuery::new().with_search("rust").matches(&p));
        assert!(CatalogQuery::new().with_search("PRACTICAL").matches(&p));
        assert!(!CatalogQuery::new().with_search("haskell").matches(&p));
    }

    #[test]
    fn test_category_filter_is_exact() {
        let p = product("T", "D", Category::Ebook, false);

        assert!(CatalogQuery::new()
            .with_category(CategoryFilter::Only(Category::Ebook))
            .matches(&p));
        assert!(!CatalogQuery::new()
            .with_category(CategoryFilter::Only(Category::Course))
            .matches(&p));
    }

    #[test]
    fn test_both_filters_intersect() {
        let p = product("Rust Course", "Learn Rust", Category::Course, false);

        let query = CatalogQuery::new()
            .with_search("rust")
            .with_category(CategoryFilter::Only(Category::Ebook));
        assert!(!query.matches(&p));
    }

    #[test]
    fn test_partition_preserves_relative_order() {
        let products = vec![
            product("a", "", Category::Course, true),
            product("b", "", Category::Course, false),
            product("c", "", Category::Course, true),
            product("d", "", Category::Course, false),
        ];
        let page = CatalogPage::partition(products);

        let featured: Vec<&str> = page.featured.iter().map(|p| p.title.as_str()).collect();
        let regular: Vec<&str> = page.regular.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(featured, vec!["a", "c"]);
        assert_eq!(regular, vec!["b", "d"]);
        assert_eq!(page.total(), 4);
    }
}
