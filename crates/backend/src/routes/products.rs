//! Catalog route handlers.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;

use velocity_core::ProductId;

use crate::error::{AppError, Result};
use crate::models::Product;
use crate::services::catalog::{CatalogService, ProductFilter};
use crate::state::AppState;

/// Catalog query parameters.
#[derive(Debug, Deserialize)]
pub struct CatalogQuery {
    pub category: Option<String>,
    pub search: Option<String>,
    pub sort: Option<String>,
}

/// List the catalog, filtered/searched/sorted per query parameters.
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<CatalogQuery>,
) -> Json<Vec<Product>> {
    let service = CatalogService::new(state.fixtures(), state.quirks(), state.round_trip());
    let products = service
        .query(&ProductFilter {
            category: query.category,
            search: query.search,
            sort: query.sort,
        })
        .await;

    Json(products)
}

/// Single product detail; 404 when the id is unknown.
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
) -> Result<Json<Product>> {
    let service = CatalogService::new(state.fixtures(), state.quirks(), state.round_trip());
    let product = service
        .by_id(&id)
        .await
        .ok_or_else(|| AppError::NotFound("Product".to_string()))?;

    Ok(Json(product))
}
