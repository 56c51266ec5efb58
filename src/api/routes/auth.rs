//! Mock authentication routes.
//!
//! Credentials are looked up by email only; the password field is accepted
//! and ignored, mirroring the mock login the UI was built against. Real
//! session handling belongs to an external collaborator.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use crate::api::state::AppState;
use crate::api::ApiError;
use crate::models::{Player, PlayerProfile};

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    #[allow(dead_code)]
    #[serde(default)]
    pub password: String,
}

pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<Player>, ApiError> {
    let club = state.club.read().await;
    club.login(&req.email)
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("no player with email {}", req.email)))
}

#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    #[serde(flatten)]
    pub profile: PlayerProfile,
    #[allow(dead_code)]
    #[serde(default)]
    pub password: String,
}

pub async fn signup(
    State(state): State<AppState>,
    Json(req): Json<SignupRequest>,
) -> Result<(StatusCode, Json<Player>), ApiError> {
    let mut club = state.club.write().await;
    let player = club.signup(req.profile)?;
    Ok((StatusCode::CREATED, Json(player)))
}
