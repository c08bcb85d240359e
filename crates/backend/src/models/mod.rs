//! Domain models for the mock backend.
//!
//! - `user` - fixture login identities
//! - `product` - catalog records
//! - `cart` - persisted cart line items and the add-to-cart draft
//! - `order` - materialized orders and their checkout payloads

pub mod cart;
pub mod order;
pub mod product;
pub mod user;

pub use cart::{CartLineItem, LineItemDraft};
pub use order::{Order, OrderDraft, PaymentInfo, ShippingInfo};
pub use product::Product;
pub use user::User;
