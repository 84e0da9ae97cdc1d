//! Creator dashboard view model.

use crate::AppError;
use maker_commerce::{Money, Product, ProductId, UserId};
use maker_events::{EventBus, Subscription, Topic};
use maker_records::RecordStore;
use serde_json::Value;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Headline numbers for the dashboard cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardStats {
    /// Products the signed-in creator owns.
    pub total_products: usize,
    /// How many of them are featured.
    pub featured_products: usize,
    /// Sum of their list prices.
    pub total_value: Money,
    /// Completed sales. Sales tracking is not wired up yet, so this is
    /// always zero.
    pub total_sales: u64,
}

/// The creator's own-products view.
///
/// Shows only records whose `creatorId` matches the signed-in identity.
/// Seed records are structurally excluded: they never enter the record
/// store. Re-queries when a created event arrives; deletes update the
/// in-memory list directly.
pub struct DashboardView {
    store: RecordStore<Product>,
    bus: EventBus,
    user_id: UserId,
    products: Vec<Product>,
    stale: Arc<AtomicBool>,
    _created_sub: Subscription,
}

impl DashboardView {
    /// Mount the dashboard for the signed-in creator.
    pub fn mount(store: RecordStore<Product>, bus: EventBus, user_id: UserId) -> Self {
        let stale = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&stale);
        let created_sub = bus.subscribe(Topic::ProductCreated, move |_| {
            flag.store(true, Ordering::SeqCst);
        });

        let products = own_products(&store, &user_id);
        Self {
            store,
            bus,
            user_id,
            products,
            stale,
            _created_sub: created_sub,
        }
    }

    /// The creator's products, re-queried first if a created event arrived
    /// since the last read.
    pub fn products(&mut self) -> &[Product] {
        if self.stale.swap(false, Ordering::SeqCst) {
            self.products = own_products(&self.store, &self.user_id);
        }
        &self.products
    }

    /// Headline stats over the creator's products.
    pub fn stats(&mut self) -> DashboardStats {
        let products = self.products();
        let total_value = products
            .iter()
            .fold(Money::zero(), |acc, p| acc.add(Money::from_decimal(p.price)));
        DashboardStats {
            total_products: products.len(),
            featured_products: products.iter().filter(|p| p.featured).count(),
            total_value,
            total_sales: 0,
        }
    }

    /// Delete a product record.
    ///
    /// Idempotent: an id that is not in the store is a no-op, not an error.
    /// Ownership is enforced only by what this view displays; there is no
    /// authorization re-check against the id itself.
    pub fn delete(&mut self, product_id: &ProductId) -> Result<(), AppError> {
        let records = self.store.load();
        let before = records.len();
        let remaining: Vec<Product> = records
            .into_iter()
            .filter(|p| &p.id != product_id)
            .collect();
        if remaining.len() == before {
            return Ok(());
        }

        self.store.save(&remaining)?;
        self.products.retain(|p| &p.id != product_id);

        tracing::info!(product_id = %product_id, "product deleted");
        self.bus.publish(
            Topic::ProductDeleted,
            Value::String(product_id.as_str().to_string()),
        );
        Ok(())
    }
}

fn own_products(store: &RecordStore<Product>, user_id: &UserId) -> Vec<Product> {
    store
        .load()
        .into_iter()
        .filter(|p| p.is_owned_by(user_id))
        .collect()
}
