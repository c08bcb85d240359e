//! Order models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use velocity_core::{OrderId, Price, UserId};

use super::cart::CartLineItem;

/// Checkout shipping details, exactly the fields the checkout form submits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingInfo {
    pub full_name: String,
    pub email: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
}

/// Checkout payment details.
///
/// Demo fixture data - nothing is charged. Implements `Debug` manually to
/// redact the card number and CVV so they cannot leak through logs.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentInfo {
    pub card_number: String,
    pub expiry_date: String,
    pub cvv: String,
}

impl std::fmt::Debug for PaymentInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PaymentInfo")
            .field("card_number", &"[REDACTED]")
            .field("expiry_date", &self.expiry_date)
            .field("cvv", &"[REDACTED]")
            .finish()
    }
}

/// An immutable order record, appended to the global order log.
///
/// Orders are write-only from the core's perspective: no exposed operation
/// reads them back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    pub user_id: UserId,
    pub items: Vec<CartLineItem>,
    pub total: Price,
    pub shipping_info: ShippingInfo,
    pub payment_info: PaymentInfo,
    pub created_at: DateTime<Utc>,
}

/// The checkout payload an order is materialized from.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderDraft {
    pub user_id: UserId,
    pub items: Vec<CartLineItem>,
    pub total: Price,
    pub shipping_info: ShippingInfo,
    pub payment_info: PaymentInfo,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payment_debug_redacts_card_and_cvv() {
        let payment = PaymentInfo {
            card_number: "4242424242424242".to_string(),
            expiry_date: "12/27".to_string(),
            cvv: "123".to_string(),
        };

        let debug_output = format!("{payment:?}");
        assert!(debug_output.contains("12/27"));
        assert!(debug_output.contains("[REDACTED]"));
        assert!(!debug_output.contains("4242424242424242"));
        assert!(!debug_output.contains("123"));
    }

    #[test]
    fn test_order_serializes_in_camel_case() {
        let order = Order {
            id: OrderId::new("order1"),
            user_id: UserId::new("user3"),
            items: Vec::new(),
            total: Price::from(10),
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
            created_at: Utc::now(),
        };

        let json = serde_json::to_value(&order).expect("serialize");
        assert!(json.get("userId").is_some());
        assert!(json.get("shippingInfo").is_some());
        assert!(json.get("createdAt").is_some());
        assert!(json["shippingInfo"].get("zipCode").is_some());
    }
}
