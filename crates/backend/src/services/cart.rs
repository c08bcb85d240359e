//! Cart engine.
//!
//! CRUD over a per-user ordered list of line items, persisted under
//! `cart:<userId>`. Two families of mutation exist:
//!
//! - user-scoped operations, addressed by `(userId, itemId)` - the
//!   canonical engine surface;
//! - `*_anywhere` operations, addressed by `itemId` alone - what the wire
//!   surface has to use, since `PUT`/`DELETE /api/cart/{itemId}` carries no
//!   user. These scan every persisted cart key and will mutate a line in
//!   whichever cart holds it, a defect the wire contract itself bakes in
//!   (see DESIGN.md).

use std::time::Duration;

use velocity_core::{LineItemId, UserId};

use crate::models::{CartLineItem, LineItemDraft};
use crate::quirks::Quirks;
use crate::services::simulate_round_trip;
use crate::storage::{JsonStore, StorageError};

/// Namespace prefix for per-user cart keys.
pub(crate) const CART_KEY_PREFIX: &str = "cart:";

fn cart_key(user_id: &UserId) -> String {
    format!("{CART_KEY_PREFIX}{user_id}")
}

/// Cart mutation engine over the persistent key-value layer.
pub struct CartService<'a> {
    store: &'a JsonStore,
    quirks: Quirks,
    round_trip: Duration,
}

impl<'a> CartService<'a> {
    /// Create a new cart service.
    #[must_use]
    pub const fn new(store: &'a JsonStore, quirks: Quirks, round_trip: Duration) -> Self {
        Self {
            store,
            quirks,
            round_trip,
        }
    }

    /// The user's cart. Unknown users get an empty cart, not an error.
    pub async fn get(&self, user_id: &UserId) -> Vec<CartLineItem> {
        simulate_round_trip(self.round_trip).await;
        self.store.read_or(&cart_key(user_id), Vec::new())
    }

    /// Add a line to the user's cart.
    ///
    /// Canonically an existing line with the same `(productId, size)` has
    /// its quantity incremented by the incoming quantity; otherwise a new
    /// line is appended with a fresh id. The `always_append_lines` quirk
    /// skips the dedup and appends unconditionally.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the updated cart cannot be persisted.
    pub async fn add_item(
        &self,
        user_id: &UserId,
        draft: LineItemDraft,
    ) -> Result<Vec<CartLineItem>, StorageError> {
        simulate_round_trip(self.round_trip).await;

        let key = cart_key(user_id);
        let mut cart: Vec<CartLineItem> = self.store.read_or(&key, Vec::new());

        let existing = if self.quirks.always_append_lines {
            None
        } else {
            cart.iter()
                .position(|line| line.product_id == draft.product_id && line.size == draft.size)
        };

        match existing {
            Some(index) => {
                if let Some(line) = cart.get_mut(index) {
                    line.quantity += draft.quantity;
                }
            }
            None => cart.push(draft.into_line_item(user_id.clone())),
        }

        self.store.write(&key, &cart)?;
        Ok(cart)
    }

    /// Replace the quantity of the user's line with the given id.
    ///
    /// A missing id is a silent no-op. Negative quantities are accepted
    /// unchecked; canonically any line left at a quantity of zero or below
    /// is dropped afterwards, unless the `keep_nonpositive_quantities`
    /// quirk retains it.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the updated cart cannot be persisted.
    pub async fn update_quantity(
        &self,
        user_id: &UserId,
        item_id: &LineItemId,
        quantity: i64,
    ) -> Result<Vec<CartLineItem>, StorageError> {
        simulate_round_trip(self.round_trip).await;

        let key = cart_key(user_id);
        let mut cart: Vec<CartLineItem> = self.store.read_or(&key, Vec::new());
        Self::apply_quantity(&mut cart, item_id, quantity, self.quirks);

        self.store.write(&key, &cart)?;
        Ok(cart)
    }

    /// Delete the user's line with the given id. A missing id is a silent
    /// no-op.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the updated cart cannot be persisted.
    pub async fn remove_item(
        &self,
        user_id: &UserId,
        item_id: &LineItemId,
    ) -> Result<Vec<CartLineItem>, StorageError> {
        simulate_round_trip(self.round_trip).await;

        let key = cart_key(user_id);
        let mut cart: Vec<CartLineItem> = self.store.read_or(&key, Vec::new());
        cart.retain(|line| line.id != *item_id);

        self.store.write(&key, &cart)?;
        Ok(cart)
    }

    /// Overwrite the user's cart with the empty sequence.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the empty cart cannot be persisted.
    pub async fn clear(&self, user_id: &UserId) -> Result<(), StorageError> {
        simulate_round_trip(self.round_trip).await;
        self.store
            .write(&cart_key(user_id), &Vec::<CartLineItem>::new())
    }

    /// Replace the quantity of the line with the given id, wherever it
    /// lives: scans every persisted cart and rewrites the ones containing
    /// the line. A missing id is a silent no-op.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the scan or a rewrite fails.
    pub async fn update_quantity_anywhere(
        &self,
        item_id: &LineItemId,
        quantity: i64,
    ) -> Result<(), StorageError> {
        simulate_round_trip(self.round_trip).await;

        for key in self.store.keys_with_prefix(CART_KEY_PREFIX)? {
            let mut cart: Vec<CartLineItem> = self.store.read_or(&key, Vec::new());
            if !cart.iter().any(|line| line.id == *item_id) {
                continue;
            }

            Self::apply_quantity(&mut cart, item_id, quantity, self.quirks);
            self.store.write(&key, &cart)?;
        }
        Ok(())
    }

    /// Delete the line with the given id, wherever it lives. A missing id
    /// is a silent no-op.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the scan or a rewrite fails.
    pub async fn remove_item_anywhere(&self, item_id: &LineItemId) -> Result<(), StorageError> {
        simulate_round_trip(self.round_trip).await;

        for key in self.store.keys_with_prefix(CART_KEY_PREFIX)? {
            let mut cart: Vec<CartLineItem> = self.store.read_or(&key, Vec::new());
            if !cart.iter().any(|line| line.id == *item_id) {
                continue;
            }

            cart.retain(|line| line.id != *item_id);
            self.store.write(&key, &cart)?;
        }
        Ok(())
    }

    fn apply_quantity(cart: &mut Vec<CartLineItem>, item_id: &LineItemId, quantity: i64, quirks: Quirks) {
        for line in cart.iter_mut() {
            if line.id == *item_id {
                line.quantity = quantity;
            }
        }
        if !quirks.keep_nonpositive_quantities {
            cart.retain(|line| line.quantity > 0);
        }
    }
}
