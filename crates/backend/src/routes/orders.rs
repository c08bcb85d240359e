//! Order route handlers.

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

use velocity_core::{OrderId, Price, UserId};

use crate::error::Result;
use crate::models::{CartLineItem, OrderDraft, PaymentInfo, ShippingInfo};
use crate::services::orders::OrderService;
use crate::state::AppState;

/// Order creation request body: the checkout payload.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    pub user_id: UserId,
    pub items: Vec<CartLineItem>,
    pub total: Price,
    pub shipping_info: ShippingInfo,
    pub payment_info: PaymentInfo,
}

/// Order creation acknowledgement.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderResponse {
    pub success: bool,
    pub order_id: OrderId,
}

/// Materialize an order from the checkout payload.
///
/// The originating cart is left alone; clearing it is the caller's call.
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<CreateOrderRequest>,
) -> Result<Json<CreateOrderResponse>> {
    let service = OrderService::new(state.store(), state.round_trip());
    let order = service
        .create(OrderDraft {
            user_id: body.user_id,
            items: body.items,
            total: body.total,
            shipping_info: body.shipping_info,
            payment_info: body.payment_info,
        })
        .await?;

    Ok(Json(CreateOrderResponse {
        success: true,
        order_id: order.id,
    }))
}
