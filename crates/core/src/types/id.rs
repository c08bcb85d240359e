//! Newtype IDs for type-safe entity references.
//!
//! Use the `define_id!` macro to create type-safe ID wrappers that prevent
//! accidentally mixing IDs from different entity types. IDs are backed by
//! strings because the fixture dataset uses human-readable identifiers
//! (`user1`, `prod3`) alongside generated UUIDs for cart lines and orders.

use uuid::Uuid;

/// Macro to define a type-safe ID wrapper.
///
/// Creates a newtype wrapper around `String` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `PartialEq`, `Eq`, `Hash`, `PartialOrd`, `Ord`
/// - Conversion methods: `new()`, `as_str()`, `into_inner()`
/// - `From<String>`, `From<&str>`, and `Display` implementations
///
/// # Example
///
/// ```rust
/// # use velocity_core::define_id;
/// define_id!(UserId);
/// define_id!(OrderId);
///
/// let user_id = UserId::new("user1");
/// let order_id = OrderId::new("order1");
///
/// // These are different types, so this won't compile:
/// // let _: UserId = order_id;
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new ID from any string-like value.
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the underlying string value.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the ID and return the underlying `String`.
            #[must_use]
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

// Define standard entity IDs
define_id!(UserId);
define_id!(ProductId);
define_id!(LineItemId);
define_id!(OrderId);

impl LineItemId {
    /// Generate a fresh collision-resistant line item ID.
    #[must_use]
    pub fn generate() -> Self {
        Self::new(Uuid::new_v4().to_string())
    }
}

impl OrderId {
    /// Generate a fresh collision-resistant order ID.
    #[must_use]
    pub fn generate() -> Self {
        Self::new(Uuid::new_v4().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_round_trips_through_serde_transparently() {
        let id = UserId::new("user1");
        let json = serde_json::to_string(&id).expect("serialize");
        assert_eq!(json, "\"user1\"");

        let back: UserId = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, id);
    }

    #[test]
    fn test_id_display_matches_inner_value() {
        let id = ProductId::new("prod3");
        assert_eq!(id.to_string(), "prod3");
        assert_eq!(id.as_str(), "prod3");
    }

    #[test]
    fn test_generated_ids_are_distinct() {
        let a = LineItemId::generate();
        let b = LineItemId::generate();
        assert_ne!(a, b);

        let a = OrderId::generate();
        let b = OrderId::generate();
        assert_ne!(a, b);
    }
}
