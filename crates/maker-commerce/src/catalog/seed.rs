//! Read-only seed catalog.
//!
//! Always present regardless of what the record store holds. Seed records
//! are never deletable and never attributed to a signed-in creator's
//! own-products view.

use crate::catalog::{Category, Product};
use crate::ids::{ProductId, UserId};

fn seed(
    id: &str,
    title: &str,
    description: &str,
    price: f64,
    image_url: &str,
    creator_id: &str,
    category: Category,
    featured: bool,
) -> Product {
    Product {
        id: ProductId::new(id),
        title: title.to_string(),
        description: description.to_string(),
        price,
        image_url: Some(image_url.to_string()),
        file_url: None,
        creator_id: UserId::new(creator_id),
        created_at: "2026-01-05T09:00:00Z".to_string(),
        category,
        featured,
    }
}

/// The six sample products every storefront starts with, two featured.
pub fn seed_products() -> Vec<Product> {
    vec![
        seed(
            "prod_1",
            "Complete Rust Mastery Course",
            "Master Rust from ownership basics to async services. Build real-world projects and learn the practices production teams rely on.",
            99.99,
            "https://images.example.com/seed/rust-course.jpg",
            "creator_1",
            Category::Course,
            true,
        ),
        seed(
            "prod_2",
            "Systems Design Deep Dives",
            "Video walkthroughs of real architectures: storage engines, message queues, and the trade-offs behind them.",
            79.99,
            "https://images.example.com/seed/systems-video.jpg",
            "creator_1",
            Category::Video,
            true,
        ),
        seed(
            "prod_3",
            "Interface Design Fundamentals",
            "Learn the principles of great design. Create clear, user-friendly interfaces that convert.",
            59.99,
            "https://images.example.com/seed/design-course.jpg",
            "creator_2",
            Category::Course,
            false,
        ),
        seed(
            "prod_4",
            "The Backend Developer's Handbook",
            "Build scalable backend services. Databases, authentication, deployment, and everything between.",
            89.99,
            "https://images.example.com/seed/backend-ebook.jpg",
            "creator_1",
            Category::Ebook,
            false,
        ),
        seed(
            "prod_5",
            "Modern Layout Techniques",
            "Master responsive layout. Build designs that hold up on every screen size.",
            49.99,
            "https://images.example.com/seed/layout-video.jpg",
            "creator_3",
            Category::Video,
            false,
        ),
        seed(
            "prod_6",
            "Landing Page Templates Pack",
            "Professional landing page templates for SaaS, e-commerce, and service businesses. Ready to customize.",
            39.99,
            "https://images.example.com/seed/templates.jpg",
            "creator_2",
            Category::Template,
            false,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_seed_shape() {
        let seeds = seed_products();
        assert_eq!(seeds.len(), 6);
        assert_eq!(seeds.iter().filter(|p| p.featured).count(), 2);
    }

    #[test]
    fn test_seed_ids_unique() {
        let seeds = seed_products();
        let ids: HashSet<&str> = seeds.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids.len(), seeds.len());
    }

    #[test]
    fn test_seed_prices_non_negative() {
        assert!(seed_products().iter().all(|p| p.price >= 0.0));
    }
}
