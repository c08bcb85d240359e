//! Catalog query engine.

use std::time::Duration;

use velocity_core::{Category, ProductId};

use crate::fixtures::FixtureStore;
use crate::models::Product;
use crate::quirks::Quirks;
use crate::services::simulate_round_trip;

/// Catalog query parameters, exactly as loose as the wire carries them.
///
/// `category`: `all`, empty, or absent means no filter; an unrecognized
/// value matches nothing. `search` is a case-insensitive substring on the
/// product name. `sort` recognizes `price-asc`/`price-desc` and ignores
/// anything else.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductFilter {
    pub category: Option<String>,
    pub search: Option<String>,
    pub sort: Option<String>,
}

enum SortKey {
    PriceAsc,
    PriceDesc,
}

fn sort_key(raw: &str) -> Option<SortKey> {
    match raw {
        "price-asc" => Some(SortKey::PriceAsc),
        "price-desc" => Some(SortKey::PriceDesc),
        _ => None,
    }
}

/// Read-only query engine over the fixture products.
pub struct CatalogService<'a> {
    fixtures: &'a FixtureStore,
    quirks: Quirks,
    round_trip: Duration,
}

impl<'a> CatalogService<'a> {
    /// Create a new catalog service.
    #[must_use]
    pub const fn new(fixtures: &'a FixtureStore, quirks: Quirks, round_trip: Duration) -> Self {
        Self {
            fixtures,
            quirks,
            round_trip,
        }
    }

    /// Filter, search, and sort the catalog, in that order. Returns a new
    /// sequence; the fixtures are untouched.
    pub async fn query(&self, filter: &ProductFilter) -> Vec<Product> {
        simulate_round_trip(self.round_trip).await;

        let mut results: Vec<Product> = self.fixtures.products().to_vec();

        if let Some(raw) = filter
            .category
            .as_deref()
            .filter(|raw| !raw.is_empty() && *raw != "all")
        {
            let wanted = raw.parse::<Category>().ok().map(|category| {
                if self.quirks.invert_category_filter {
                    category.opposite()
                } else {
                    category
                }
            });
            // Unrecognized categories match nothing.
            results.retain(|product| wanted == Some(product.category));
        }

        if let Some(search) = filter.search.as_deref().filter(|s| !s.is_empty()) {
            let needle = search.trim().to_lowercase();
            results.retain(|product| product.name.to_lowercase().contains(&needle));
        }

        match filter.sort.as_deref().and_then(sort_key) {
            Some(SortKey::PriceAsc) => {
                if self.quirks.lexicographic_price_sort {
                    results.sort_by_key(|product| product.price.to_string());
                } else {
                    results.sort_by_key(|product| product.price);
                }
            }
            Some(SortKey::PriceDesc) => {
                if self.quirks.lexicographic_price_sort {
                    results.sort_by(|a, b| b.price.to_string().cmp(&a.price.to_string()));
                } else {
                    results.sort_by(|a, b| b.price.cmp(&a.price));
                }
            }
            None => {}
        }

        results
    }

    /// Look up a single product by id.
    pub async fn by_id(&self, id: &ProductId) -> Option<Product> {
        simulate_round_trip(self.round_trip).await;
        self.fixtures.product_by_id(id).cloned()
    }
}
