//! Authentication route handlers.

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

use velocity_core::UserId;

use crate::error::Result;
use crate::services::auth::AuthService;
use crate::state::AppState;

/// Login request body.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Login response payload.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub success: bool,
    pub user_id: UserId,
    pub username: String,
    pub message: String,
}

/// Verify credentials against the fixture users.
pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<Json<LoginResponse>> {
    let service = AuthService::new(state.fixtures(), state.quirks(), state.round_trip());
    let outcome = service.login(&body.username, &body.password).await?;

    Ok(Json(LoginResponse {
        success: true,
        user_id: outcome.user_id,
        username: outcome.username,
        message: "Login successful".to_string(),
    }))
}
