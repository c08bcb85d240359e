//! Order materializer.

use std::time::Duration;

use chrono::Utc;

use velocity_core::OrderId;

use crate::models::{Order, OrderDraft};
use crate::services::simulate_round_trip;
use crate::storage::{JsonStore, StorageError};

/// Storage key of the global order log.
pub(crate) const ORDERS_KEY: &str = "orders";

/// Materializes cart snapshots into the append-only order log.
pub struct OrderService<'a> {
    store: &'a JsonStore,
    round_trip: Duration,
}

impl<'a> OrderService<'a> {
    /// Create a new order service.
    #[must_use]
    pub const fn new(store: &'a JsonStore, round_trip: Duration) -> Self {
        Self { store, round_trip }
    }

    /// Materialize an order: fresh id, current timestamp, appended to the
    /// log without deduplication. Nothing is validated and the originating
    /// cart is NOT cleared - that is the caller's explicit choice.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the order log cannot be persisted.
    pub async fn create(&self, draft: OrderDraft) -> Result<Order, StorageError> {
        simulate_round_trip(self.round_trip).await;

        let mut orders: Vec<Order> = self.store.read_or(ORDERS_KEY, Vec::new());
        let order = Order {
            id: OrderId::generate(),
            user_id: draft.user_id,
            items: draft.items,
            total: draft.total,
            shipping_info: draft.shipping_info,
            payment_info: draft.payment_info,
            created_at: Utc::now(),
        };

        orders.push(order.clone());
        self.store.write(ORDERS_KEY, &orders)?;
        Ok(order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use velocity_core::{Price, UserId};

    use crate::models::{PaymentInfo, ShippingInfo};

    fn checkout_draft() -> OrderDraft {
        OrderDraft {
            user_id: UserId::new("user3"),
            items: Vec::new(),
            total: Price::from(130),
            shipping_info: ShippingInfo {
                full_name: "Test User".to_string(),
                email: "test@example.com".to_string(),
                address: "1 Demo St".to_string(),
                city: "Springfield".to_string(),
                state: "IL".to_string(),
                zip_code: "62704".to_string(),
            },
            payment_info: PaymentInfo {
                card_number: "4242424242424242".to_string(),
                expiry_date: "12/27".to_string(),
                cvv: "123".to_string(),
            },
        }
    }

    #[tokio::test]
    async fn test_identical_drafts_produce_distinct_orders() {
        let store = JsonStore::in_memory();
        let svc = OrderService::new(&store, Duration::ZERO);

        let first = svc.create(checkout_draft()).await.expect("create");
        let second = svc.create(checkout_draft()).await.expect("create");

        assert_ne!(first.id, second.id);
        assert!(second.created_at >= first.created_at);

        let log: Vec<Order> = store.read_or(ORDERS_KEY, Vec::new());
        assert_eq!(log.len(), 2);
    }

    #[tokio::test]
    async fn test_create_does_not_touch_carts() {
        let store = JsonStore::in_memory();
        store
            .write("cart:user3", &vec!["sentinel".to_string()])
            .expect("seed cart");

        OrderService::new(&store, Duration::ZERO)
            .create(checkout_draft())
            .await
            .expect("create");

        let cart: Vec<String> = store.read_or("cart:user3", Vec::new());
        assert_eq!(cart, vec!["sentinel".to_string()]);
    }

    #[tokio::test]
    async fn test_order_snapshot_preserves_draft_fields() {
        let store = JsonStore::in_memory();
        let order = OrderService::new(&store, Duration::ZERO)
            .create(checkout_draft())
            .await
            .expect("create");

        assert_eq!(order.user_id, UserId::new("user3"));
        assert_eq!(order.total, Price::from(130));
        assert_eq!(order.shipping_info.city, "Springfield");
    }
}
