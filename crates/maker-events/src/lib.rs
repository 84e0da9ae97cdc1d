//! In-process publish/subscribe event bus for makerstore.
//!
//! Independently mounted views stay consistent over a single shared record
//! store by broadcasting catalog-change notifications through this bus
//! instead of reaching for a global event target. Delivery is synchronous:
//! [`EventBus::publish`] invokes every handler currently subscribed to the
//! topic, in subscription order, before returning. There is no queueing, no
//! cross-process delivery, and no retry.
//!
//! Subscribing returns a [`Subscription`] handle. A view subscribes on mount
//! and must release the handle on unmount, either by calling
//! [`Subscription::unsubscribe`] or by dropping it.
//!
//! # Example
//!
//! ```
//! use maker_events::{EventBus, Topic};
//!
//! let bus = EventBus::new();
//! let sub = bus.subscribe(Topic::ProductCreated, |_detail| {
//!     // re-query the catalog
//! });
//!
//! bus.publish(Topic::ProductCreated, serde_json::json!({"id": "prod_1"}));
//! sub.unsubscribe();
//! ```

use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex, Weak};

/// Topics the storefront broadcasts on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Topic {
    /// A product record was created.
    ProductCreated,
    /// A product record was deleted.
    ProductDeleted,
}

impl Topic {
    pub fn as_str(&self) -> &'static str {
        match self {
            Topic::ProductCreated => "product_created",
            Topic::ProductDeleted => "product_deleted",
        }
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

type Handler = Arc<dyn Fn(&Value) + Send + Sync>;

#[derive(Default)]
struct Registry {
    next_id: u64,
    handlers: HashMap<Topic, Vec<(u64, Handler)>>,
}

/// Synchronous broadcast bus with typed topics.
///
/// Cloning yields another handle to the same bus, so the bus can be injected
/// into each view.
#[derive(Clone, Default)]
pub struct EventBus {
    registry: Arc<Mutex<Registry>>,
}

impl EventBus {
    /// Create a new bus with no subscribers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe a handler to a topic.
    ///
    /// Handlers receive the published detail payload. The payload is carried
    /// for forward compatibility; subscribers are expected to treat events as
    /// idempotent re-query triggers rather than rely on its shape.
    pub fn subscribe<F>(&self, topic: Topic, handler: F) -> Subscription
    where
        F: Fn(&Value) + Send + Sync + 'static,
    {
        let mut registry = self.registry.lock().unwrap_or_else(|e| e.into_inner());
        let id = registry.next_id;
        registry.next_id += 1;
        registry
            .handlers
            .entry(topic)
            .or_default()
            .push((id, Arc::new(handler)));

        Subscription {
            registry: Arc::downgrade(&self.registry),
            topic,
            id,
        }
    }

    /// Publish an event, invoking all current subscribers for the topic in
    /// subscription order before returning.
    pub fn publish(&self, topic: Topic, detail: Value) {
        // Snapshot handlers outside the lock so a handler may publish or
        // subscribe without deadlocking.
        let handlers: Vec<Handler> = {
            let registry = self.registry.lock().unwrap_or_else(|e| e.into_inner());
            registry
                .handlers
                .get(&topic)
                .map(|subs| subs.iter().map(|(_, h)| Arc::clone(h)).collect())
                .unwrap_or_default()
        };

        for handler in handlers {
            handler(&detail);
        }
    }

    /// Number of live subscriptions on a topic.
    pub fn subscriber_count(&self, topic: Topic) -> usize {
        let registry = self.registry.lock().unwrap_or_else(|e| e.into_inner());
        registry.handlers.get(&topic).map_or(0, Vec::len)
    }
}

/// Handle for a registered subscriber.
///
/// Dropping the handle removes the subscription; [`Subscription::unsubscribe`]
/// does the same explicitly.
pub struct Subscription {
    registry: Weak<Mutex<Registry>>,
    topic: Topic,
    id: u64,
}

impl Subscription {
    /// Remove this subscription from the bus.
    pub fn unsubscribe(self) {
        // Drop does the work.
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            let mut registry = registry.lock().unwrap_or_else(|e| e.into_inner());
            if let Some(subs) = registry.handlers.get_mut(&self.topic) {
                subs.retain(|(id, _)| *id != self.id);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_publish_invokes_subscriber_synchronously() {
        let bus = EventBus::new();
        let calls = Arc::new(AtomicUsize::new(0));
        let calls2 = Arc::clone(&calls);

        let _sub = bus.subscribe(Topic::ProductCreated, move |_| {
            calls2.fetch_add(1, Ordering::SeqCst);
        });

        bus.publish(Topic::ProductCreated, Value::Null);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_delivery_in_subscription_order() {
        let bus = EventBus::new();
        let order = Arc::new(Mutex::new(Vec::new()));

        let o1 = Arc::clone(&order);
        let _a = bus.subscribe(Topic::ProductCreated, move |_| {
            o1.lock().unwrap().push("first");
        });
        let o2 = Arc::clone(&order);
        let _b = bus.subscribe(Topic::ProductCreated, move |_| {
            o2.lock().unwrap().push("second");
        });

        bus.publish(Topic::ProductCreated, Value::Null);
        assert_eq!(*order.lock().unwrap(), vec!["first", "second"]);
    }

    #[test]
    fn test_topics_are_independent() {
        let bus = EventBus::new();
        let calls = Arc::new(AtomicUsize::new(0));
        let calls2 = Arc::clone(&calls);

        let _sub = bus.subscribe(Topic::ProductDeleted, move |_| {
            calls2.fetch_add(1, Ordering::SeqCst);
        });

        bus.publish(Topic::ProductCreated, Value::Null);
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        bus.publish(Topic::ProductDeleted, Value::Null);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_unsubscribe_stops_delivery() {
        let bus = EventBus::new();
        let calls = Arc::new(AtomicUsize::new(0));
        let calls2 = Arc::clone(&calls);

        let sub = bus.subscribe(Topic::ProductCreated, move |_| {
            calls2.fetch_add(1, Ordering::SeqCst);
        });
        bus.publish(Topic::ProductCreated, Value::Null);
        sub.unsubscribe();
        bus.publish(Topic::ProductCreated, Value::Null);

        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_drop_unsubscribes() {
        let bus = EventBus::new();
        {
            let _sub = bus.subscribe(Topic::ProductCreated, |_| {});
            assert_eq!(bus.subscriber_count(Topic::ProductCreated), 1);
        }
        assert_eq!(bus.subscriber_count(Topic::ProductCreated), 0);
    }

    #[test]
    fn test_detail_payload_reaches_handler() {
        let bus = EventBus::new();
        let seen = Arc::new(Mutex::new(None));
        let seen2 = Arc::clone(&seen);

        let _sub = bus.subscribe(Topic::ProductDeleted, move |detail| {
            *seen2.lock().unwrap() = detail.as_str().map(String::from);
        });

        bus.publish(Topic::ProductDeleted, Value::String("prod_9".into()));
        assert_eq!(seen.lock().unwrap().as_deref(), Some("prod_9"));
    }

    #[test]
    fn test_publish_from_handler_does_not_deadlock() {
        let bus = EventBus::new();
        let calls = Arc::new(AtomicUsize::new(0));

        let inner_bus = bus.clone();
        let calls2 = Arc::clone(&calls);
        let _a = bus.subscribe(Topic::ProductCreated, move |_| {
            inner_bus.publish(Topic::ProductDeleted, Value::Null);
        });
        let _b = bus.subscribe(Topic::ProductDeleted, move |_| {
            calls2.fetch_add(1, Ordering::SeqCst);
        });

        bus.publish(Topic::ProductCreated, Value::Null);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
