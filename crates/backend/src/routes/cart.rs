//! Cart route handlers.
//!
//! The identity-swap quirk lives here, on the read path only: with
//! `swap_cart_identities` enabled, `GET /api/cart/user1` resolves to
//! `user2`'s cart and vice versa, while the mutation routes below operate
//! on exactly the line id they are given.

use axum::{
    Json,
    extract::{Path, State},
};
use serde::{Deserialize, Serialize};

use velocity_core::{LineItemId, Price, ProductId, UserId};

use crate::error::Result;
use crate::models::{CartLineItem, LineItemDraft};
use crate::quirks::Quirks;
use crate::services::cart::CartService;
use crate::state::AppState;

// =============================================================================
// Request/Response Types
// =============================================================================

/// Add-to-cart request body: the line item fields plus the owning user.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddToCartRequest {
    pub user_id: UserId,
    pub product_id: ProductId,
    pub name: String,
    pub price: Price,
    pub quantity: i64,
    pub size: String,
    pub image: String,
}

/// Quantity update request body.
#[derive(Debug, Deserialize)]
pub struct UpdateCartRequest {
    pub quantity: i64,
}

/// Add-to-cart acknowledgement.
#[derive(Debug, Serialize)]
pub struct AddToCartResponse {
    pub success: bool,
    pub message: String,
}

/// Mutation acknowledgement for updates and removals.
#[derive(Debug, Serialize)]
pub struct MutationResponse {
    pub success: bool,
}

/// Resolve which user's cart a read addresses.
fn resolve_read_user(quirks: Quirks, user_id: UserId) -> UserId {
    if !quirks.swap_cart_identities {
        return user_id;
    }
    match user_id.as_str() {
        "user1" => UserId::new("user2"),
        "user2" => UserId::new("user1"),
        _ => user_id,
    }
}

// =============================================================================
// Handlers
// =============================================================================

/// The user's cart.
pub async fn show(
    State(state): State<AppState>,
    Path(user_id): Path<UserId>,
) -> Json<Vec<CartLineItem>> {
    let user_id = resolve_read_user(state.quirks(), user_id);
    let service = CartService::new(state.store(), state.quirks(), state.round_trip());

    Json(service.get(&user_id).await)
}

/// Add a line item to the given user's cart.
pub async fn add(
    State(state): State<AppState>,
    Json(body): Json<AddToCartRequest>,
) -> Result<Json<AddToCartResponse>> {
    let service = CartService::new(state.store(), state.quirks(), state.round_trip());
    let draft = LineItemDraft {
        product_id: body.product_id,
        name: body.name,
        price: body.price,
        quantity: body.quantity,
        size: body.size,
        image: body.image,
    };
    service.add_item(&body.user_id, draft).await?;

    Ok(Json(AddToCartResponse {
        success: true,
        message: "Added to cart".to_string(),
    }))
}

/// Replace a line's quantity. The path carries no user id, so the line is
/// located by scanning every persisted cart; a missing id is a no-op.
pub async fn update(
    State(state): State<AppState>,
    Path(item_id): Path<LineItemId>,
    Json(body): Json<UpdateCartRequest>,
) -> Result<Json<MutationResponse>> {
    let service = CartService::new(state.store(), state.quirks(), state.round_trip());
    service
        .update_quantity_anywhere(&item_id, body.quantity)
        .await?;

    Ok(Json(MutationResponse { success: true }))
}

/// Remove a line. Same id-scan addressing as `update`; a missing id is a
/// no-op.
pub async fn remove(
    State(state): State<AppState>,
    Path(item_id): Path<LineItemId>,
) -> Result<Json<MutationResponse>> {
    let service = CartService::new(state.store(), state.quirks(), state.round_trip());
    service.remove_item_anywhere(&item_id).await?;

    Ok(Json(MutationResponse { success: true }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_user_passes_through_canonically() {
        let user = resolve_read_user(Quirks::canonical(), UserId::new("user1"));
        assert_eq!(user, UserId::new("user1"));
    }

    #[test]
    fn test_read_user_swaps_with_quirk() {
        let quirks = Quirks {
            swap_cart_identities: true,
            ..Quirks::canonical()
        };

        assert_eq!(
            resolve_read_user(quirks, UserId::new("user1")),
            UserId::new("user2")
        );
        assert_eq!(
            resolve_read_user(quirks, UserId::new("user2")),
            UserId::new("user1")
        );
        assert_eq!(
            resolve_read_user(quirks, UserId::new("user3")),
            UserId::new("user3")
        );
    }
}
