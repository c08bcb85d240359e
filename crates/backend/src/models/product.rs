//! Catalog product model.

use serde::{Deserialize, Serialize};

use velocity_core::{Category, Price, ProductId};

/// A catalog record.
///
/// Products are static seed data, identified by `id`. `sizes` preserves the
/// fixture's declaration order (it renders as the size picker).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: Price,
    pub category: Category,
    pub image: String,
    pub thumbnail: String,
    pub description: String,
    pub sizes: Vec<String>,
}
