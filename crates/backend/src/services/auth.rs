//! Auth verifier.

use std::time::Duration;

use thiserror::Error;

use velocity_core::UserId;

use crate::fixtures::FixtureStore;
use crate::quirks::Quirks;
use crate::services::simulate_round_trip;

/// Errors that can occur during authentication.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    /// Username/password pair matches no fixture user.
    #[error("invalid credentials")]
    InvalidCredentials,
}

/// A successful login: the verified identity, nothing more.
///
/// There is no session token; any persisted "logged-in" state is the
/// caller's responsibility.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginOutcome {
    pub user_id: UserId,
    pub username: String,
}

/// Credential verifier over the fixture user list.
pub struct AuthService<'a> {
    fixtures: &'a FixtureStore,
    quirks: Quirks,
    round_trip: Duration,
}

impl<'a> AuthService<'a> {
    /// Create a new auth service.
    #[must_use]
    pub const fn new(fixtures: &'a FixtureStore, quirks: Quirks, round_trip: Duration) -> Self {
        Self {
            fixtures,
            quirks,
            round_trip,
        }
    }

    /// Verify a username/password pair.
    ///
    /// Surrounding whitespace is trimmed from the username; the password is
    /// compared verbatim. With the `login_backdoor` quirk enabled, the
    /// legacy pair `(user1, user@2)` is accepted as `user1` even though it
    /// matches no fixture record.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::InvalidCredentials`] on any mismatch.
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginOutcome, AuthError> {
        simulate_round_trip(self.round_trip).await;

        let username = username.trim();
        let mut user = self
            .fixtures
            .users()
            .iter()
            .find(|user| user.username == username && user.password == password);

        if user.is_none()
            && self.quirks.login_backdoor
            && username == "user1"
            && password == "user@2"
        {
            user = self.fixtures.user_by_username("user1");
        }

        let user = user.ok_or(AuthError::InvalidCredentials)?;
        Ok(LoginOutcome {
            user_id: user.id.clone(),
            username: user.username.clone(),
        })
    }
}
