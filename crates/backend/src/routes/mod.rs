//! Request router for the mock storefront API.
//!
//! # Route Structure
//!
//! ```text
//! POST   /api/auth/login       - Verify fixture credentials
//!
//! # Catalog
//! GET    /api/products         - Filter/search/sort the catalog
//! GET    /api/products/{id}    - Product detail; 404 if absent
//!
//! # Cart
//! GET    /api/cart/{userId}    - The user's cart (identity-swap quirk
//!                                applies here, and only here)
//! POST   /api/cart/add         - Add a line item
//! PUT    /api/cart/{itemId}    - Replace a line's quantity
//! DELETE /api/cart/{itemId}    - Remove a line
//!
//! # Orders
//! POST   /api/orders           - Materialize an order
//! ```
//!
//! Unknown routes fall through to a 404 `{"detail": ...}` body. Request
//! bodies are validated by typed extractors before any engine runs.

pub mod auth;
pub mod cart;
pub mod orders;
pub mod products;

use axum::{
    Router,
    routing::{get, post},
};

use crate::error::AppError;
use crate::state::AppState;

/// Create the auth routes router.
pub fn auth_routes() -> Router<AppState> {
    Router::new().route("/login", post(auth::login))
}

/// Create the catalog routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(products::index))
        .route("/{id}", get(products::show))
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/add", post(cart::add))
        .route("/{id}", get(cart::show).put(cart::update).delete(cart::remove))
}

/// Create the order routes router.
pub fn order_routes() -> Router<AppState> {
    Router::new().route("/", post(orders::create))
}

/// Create all routes for the mock backend.
pub fn routes() -> Router<AppState> {
    Router::new()
        .nest("/api/auth", auth_routes())
        .nest("/api/products", product_routes())
        .nest("/api/cart", cart_routes())
        .nest("/api/orders", order_routes())
        .fallback(unknown_route)
}

/// Shape unknown paths like any other missing resource.
async fn unknown_route() -> AppError {
    AppError::NotFound("Route".to_string())
}
