//! Fixture user model.

use serde::{Deserialize, Serialize};

use velocity_core::UserId;

/// A fixture login identity.
///
/// Users are static seed data; the password is plaintext demo fixture
/// material, never real credential storage. Implements `Debug` manually to
/// redact it anyway so it cannot leak through logs.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub password: String,
}

impl std::fmt::Debug for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}
