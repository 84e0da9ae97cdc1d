//! Product record and category types.

use crate::ids::{ProductId, UserId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Product category.
///
/// Exactly these four values are valid; the storage format and the category
/// selector both use the lowercase form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Course,
    Video,
    Ebook,
    Template,
}

impl Category {
    /// All categories, in selector display order.
    pub const ALL: [Category; 4] = [
        Category::Course,
        Category::Video,
        Category::Ebook,
        Category::Template,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Course => "course",
            Category::Video => "video",
            Category::Ebook => "ebook",
            Category::Template => "template",
        }
    }

    /// Parse a category string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "course" => Some(Category::Course),
            "video" => Some(Category::Video),
            "ebook" => Some(Category::Ebook),
            "template" => Some(Category::Template),
            _ => None,
        }
    }

    /// Plural label for the storefront's category chips.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Course => "Courses",
            Category::Video => "Videos",
            Category::Ebook => "E-books",
            Category::Template => "Templates",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A digital product in the catalog.
///
/// Created once through the upload flow and immutable afterwards except for
/// deletion; there is no edit path. Field names in the serialized form match
/// the owned local-storage format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product title (non-empty).
    pub title: String,
    /// Full description.
    pub description: String,
    /// Price in USD, kept as the exact decimal the creator entered.
    /// Converted to cents only at the checkout boundary.
    pub price: f64,
    /// Public URL of the cover image, if one was uploaded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Public URL of the deliverable file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_url: Option<String>,
    /// Identity of the uploading creator.
    pub creator_id: UserId,
    /// ISO-8601 creation timestamp.
    pub created_at: String,
    /// Product category.
    pub category: Category,
    /// Featured products render in the storefront's top tier.
    pub featured: bool,
}

impl Product {
    /// Create a new product with a fresh id and the current timestamp.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        price: f64,
        category: Category,
        creator_id: UserId,
    ) -> Self {
        Self {
            id: ProductId::generate(),
            title: title.into(),
            description: description.into(),
            price,
            image_url: None,
            file_url: None,
            creator_id,
            created_at: chrono::Utc::now().to_rfc3339(),
            category,
            featured: false,
        }
    }

    /// Set the cover image URL.
    pub fn with_image_url(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }

    /// Set the deliverable file URL.
    pub fn with_file_url(mut self, url: impl Into<String>) -> Self {
        self.file_url = Some(url.into());
        self
    }

    /// Mark the product as featured.
    pub fn with_featured(mut self, featured: bool) -> Self {
        self.featured = featured;
        self
    }

    /// Whether this product is owned by the given identity.
    pub fn is_owned_by(&self, user_id: &UserId) -> bool {
        &self.creator_id == user_id
    }
}
