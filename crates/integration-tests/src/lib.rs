//! Integration tests for the Velocity mock backend.
//!
//! The router is a tower service, so the whole API surface is exercised
//! in-process: build a [`TestBackend`], issue requests with
//! [`TestBackend::request`] (or the method shorthands), and assert on the
//! `(status, json)` pairs that come back. No listener is bound anywhere.
//!
//! # Test Categories
//!
//! - `api_auth` - Login verification, backdoor gating
//! - `api_products` - Catalog filter/search/sort, both compat profiles
//! - `api_cart` - Cart mutation semantics, persistence, identity quirks
//! - `api_orders` - Order materialization

#![cfg_attr(not(test), forbid(unsafe_code))]

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Method, Request, StatusCode, header};
use serde_json::Value;
use tower::ServiceExt;

use velocity_backend::config::BackendConfig;
use velocity_backend::fixtures::FixtureStore;
use velocity_backend::quirks::Quirks;
use velocity_backend::routes;
use velocity_backend::state::AppState;
use velocity_backend::storage::JsonStore;

/// An in-process mock backend plus the storage handle behind it.
pub struct TestBackend {
    router: Router,
    store: JsonStore,
}

impl TestBackend {
    /// A backend over a fresh in-memory store with the given compat
    /// profile, zero latency, and the seed fixtures.
    #[must_use]
    pub fn new(quirks: Quirks) -> Self {
        Self::with_store(quirks, JsonStore::in_memory())
    }

    /// A backend over an existing store. Building two backends on one
    /// store models a page reload against the same persisted state.
    #[must_use]
    pub fn with_store(quirks: Quirks, store: JsonStore) -> Self {
        let config = BackendConfig {
            quirks,
            ..BackendConfig::default()
        };
        let state = AppState::with_store(config, FixtureStore::seed(), store.clone());
        let router = routes::routes().with_state(state);
        Self { router, store }
    }

    /// The storage handle shared with the backend.
    #[must_use]
    pub fn store(&self) -> &JsonStore {
        &self.store
    }

    /// Issue one request and decode the response.
    ///
    /// Returns the status code and the JSON body (`Value::Null` when the
    /// body is empty or not JSON, e.g. extractor rejections).
    ///
    /// # Panics
    ///
    /// Panics if the request cannot be built or the service fails, which
    /// only happens on malformed test input.
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(path);
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string())),
            None => builder.body(Body::empty()),
        }
        .expect("request builds");

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible");
        let status = response.status();

        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body reads");
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };

        (status, json)
    }

    /// `GET path`.
    pub async fn get(&self, path: &str) -> (StatusCode, Value) {
        self.request(Method::GET, path, None).await
    }

    /// `POST path` with a JSON body.
    pub async fn post(&self, path: &str, body: Value) -> (StatusCode, Value) {
        self.request(Method::POST, path, Some(body)).await
    }

    /// `PUT path` with a JSON body.
    pub async fn put(&self, path: &str, body: Value) -> (StatusCode, Value) {
        self.request(Method::PUT, path, Some(body)).await
    }

    /// `DELETE path`.
    pub async fn delete(&self, path: &str) -> (StatusCode, Value) {
        self.request(Method::DELETE, path, None).await
    }
}
