//! Velocity mock backend library.
//!
//! An in-process emulation of the HTTP backend behind the Velocity
//! storefront demo. The router, engines, and storage layer are all plain
//! values: callers build an [`state::AppState`], obtain the router from
//! [`routes::routes`], and drive it as a tower service - no socket required.
//! The `velocity-backend` binary serves the same router over HTTP for the
//! demo UI.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod fixtures;
pub mod models;
pub mod quirks;
pub mod routes;
pub mod services;
pub mod state;
pub mod storage;
