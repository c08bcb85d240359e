//! Cart line item models.

use serde::{Deserialize, Serialize};

use velocity_core::{LineItemId, Price, ProductId, UserId};

/// One product+size+quantity entry within a user's cart.
///
/// Field names serialize in camelCase for wire parity with the demo UI.
/// `quantity` is caller-controlled and deliberately not validated to be
/// positive at this layer; negative values persist wherever the active
/// policy keeps them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLineItem {
    pub id: LineItemId,
    pub user_id: UserId,
    pub product_id: ProductId,
    pub name: String,
    pub price: Price,
    pub quantity: i64,
    pub size: String,
    pub image: String,
}

/// The add-to-cart payload: a line item minus its generated id and owner.
#[derive(Debug, Clone, PartialEq)]
pub struct LineItemDraft {
    pub product_id: ProductId,
    pub name: String,
    pub price: Price,
    pub quantity: i64,
    pub size: String,
    pub image: String,
}

impl LineItemDraft {
    /// Materialize the draft into a line owned by `user_id`, minting a
    /// fresh line item id.
    #[must_use]
    pub fn into_line_item(self, user_id: UserId) -> CartLineItem {
        CartLineItem {
            id: LineItemId::generate(),
            user_id,
            product_id: self.product_id,
            name: self.name,
            price: self.price,
            quantity: self.quantity,
            size: self.size,
            image: self.image,
        }
    }
}
