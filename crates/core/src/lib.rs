//! Velocity Core - Shared types library.
//!
//! This crate provides common types used across the Velocity components:
//! - `backend` - Mock storefront backend (fixtures, carts, orders)
//! - `integration-tests` - Wire-level tests over the request router
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage access, no HTTP.
//! This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, and categories

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
