//! Business logic engines for the mock backend.
//!
//! # Services
//!
//! - `auth` - credential checks against the fixture users
//! - `cart` - persisted per-user cart mutation
//! - `catalog` - filter/search/sort over the fixture products
//! - `orders` - cart snapshot materialization into the order log
//!
//! Services are constructed per request from [`crate::state::AppState`],
//! borrowing the shared fixture store and storage handle. Every operation
//! suspends exactly once, at [`simulate_round_trip`]; the storage access
//! after it is synchronous, so no operation suspends mid-mutation.

pub mod auth;
pub mod cart;
pub mod catalog;
pub mod orders;

use std::time::Duration;

/// The single simulated I/O pause at the head of every engine operation,
/// standing in for the network round trip a real backend would cost.
pub(crate) async fn simulate_round_trip(delay: Duration) {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
}
