//! Core types for Velocity.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod category;
pub mod id;
pub mod price;

pub use category::Category;
pub use id::*;
pub use price::Price;
