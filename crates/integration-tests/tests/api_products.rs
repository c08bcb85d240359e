//! Wire-level tests for the catalog routes.

use axum::http::StatusCode;
use serde_json::{Value, json};

use velocity_backend::quirks::Quirks;
use velocity_integration_tests::TestBackend;

fn names(body: &Value) -> Vec<String> {
    body.as_array()
        .expect("array body")
        .iter()
        .map(|p| p["name"].as_str().expect("name").to_string())
        .collect()
}

fn prices(body: &Value) -> Vec<f64> {
    body.as_array()
        .expect("array body")
        .iter()
        .map(|p| p["price"].as_f64().expect("numeric price"))
        .collect()
}

#[tokio::test]
async fn test_unfiltered_listing_returns_full_catalog() {
    let backend = TestBackend::new(Quirks::canonical());

    let (status, body) = backend.get("/api/products").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().expect("array body").len(), 6);
}

#[tokio::test]
async fn test_category_all_is_no_filter() {
    let backend = TestBackend::new(Quirks::canonical());

    let (_, body) = backend.get("/api/products?category=all").await;
    assert_eq!(body.as_array().expect("array body").len(), 6);
}

#[tokio::test]
async fn test_category_men_returns_only_men_canonically() {
    let backend = TestBackend::new(Quirks::canonical());

    let (_, body) = backend.get("/api/products?category=men").await;
    let categories: Vec<&str> = body
        .as_array()
        .expect("array body")
        .iter()
        .map(|p| p["category"].as_str().expect("category"))
        .collect();

    assert_eq!(categories.len(), 3);
    assert!(categories.iter().all(|c| *c == "men"));
}

#[tokio::test]
async fn test_category_men_returns_only_women_on_legacy_profile() {
    let backend = TestBackend::new(Quirks::legacy_demo());

    let (_, body) = backend.get("/api/products?category=men").await;
    let categories: Vec<&str> = body
        .as_array()
        .expect("array body")
        .iter()
        .map(|p| p["category"].as_str().expect("category"))
        .collect();

    assert_eq!(categories.len(), 3);
    assert!(categories.iter().all(|c| *c == "women"));
}

#[tokio::test]
async fn test_search_matches_case_insensitive_substring() {
    let backend = TestBackend::new(Quirks::canonical());

    let (_, body) = backend.get("/api/products?search=ZOOM").await;
    assert_eq!(names(&body), vec!["Air Zoom Pegasus"]);
}

#[tokio::test]
async fn test_price_asc_is_numeric_canonically() {
    let backend = TestBackend::new(Quirks::canonical());

    let (_, body) = backend.get("/api/products?sort=price-asc").await;
    assert_eq!(prices(&body), vec![35.0, 65.0, 85.0, 100.0, 120.0, 160.0]);
}

#[tokio::test]
async fn test_price_desc_is_numeric_canonically() {
    let backend = TestBackend::new(Quirks::canonical());

    let (_, body) = backend.get("/api/products?sort=price-desc").await;
    assert_eq!(prices(&body), vec![160.0, 120.0, 100.0, 85.0, 65.0, 35.0]);
}

#[tokio::test]
async fn test_price_asc_is_lexicographic_on_legacy_profile() {
    let backend = TestBackend::new(Quirks::legacy_demo());

    let (_, body) = backend.get("/api/products?sort=price-asc").await;
    // "100" < "120" < "160" < "35" < "65" < "85" as strings.
    assert_eq!(prices(&body), vec![100.0, 120.0, 160.0, 35.0, 65.0, 85.0]);
}

#[tokio::test]
async fn test_filters_compose_category_search_sort() {
    let backend = TestBackend::new(Quirks::canonical());

    let (_, body) = backend
        .get("/api/products?category=men&search=i&sort=price-asc")
        .await;

    assert_eq!(
        names(&body),
        vec!["Dri-FIT Training Shirt", "Court Vision Basketball", "Air Zoom Pegasus"]
    );
}

#[tokio::test]
async fn test_product_detail_by_id() {
    let backend = TestBackend::new(Quirks::canonical());

    let (status, body) = backend.get("/api/products/prod3").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], json!("Dri-FIT Training Shirt"));
    assert_eq!(body["sizes"], json!(["S", "M", "L", "XL"]));
}

#[tokio::test]
async fn test_unknown_product_is_404() {
    let backend = TestBackend::new(Quirks::canonical());

    let (status, body) = backend.get("/api/products/prod99").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], json!("Product not found"));
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    let backend = TestBackend::new(Quirks::canonical());

    let (status, body) = backend.get("/api/warehouse").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], json!("Route not found"));
}
