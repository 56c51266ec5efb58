//! REST API endpoints.
//!
//! Axum-based HTTP API exposing the club operations to the UI layer:
//! membership, match lifecycle, availability, balancing, and ratings.

pub mod routes;
pub mod state;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use thiserror::Error;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::club::ClubError;
use state::AppState;

/// API error types.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<ClubError> for ApiError {
    fn from(err: ClubError) -> Self {
        match err {
            ClubError::MatchNotFound(_) | ClubError::PlayerNotFound(_) => {
                ApiError::NotFound(err.to_string())
            }
            ClubError::InvalidScore(_) => ApiError::BadRequest(err.to_string()),
            ClubError::EmailTaken(_)
            | ClubError::AlreadyRated
            | ClubError::NotAManager(_)
            | ClubError::MatchCompleted(_)
            | ClubError::MatchNotRateable(_)
            | ClubError::NotOpponents { .. } => ApiError::Conflict(err.to_string()),
        }
    }
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, "BAD_REQUEST"),
            ApiError::Conflict(_) => (StatusCode::CONFLICT, "CONFLICT"),
            ApiError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        };

        let body = ErrorResponse {
            error: ErrorDetail {
                code: code.to_string(),
                message: self.to_string(),
            },
        };

        (status, Json(body)).into_response()
    }
}

/// Build the API router.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/auth/login", post(routes::auth::login))
        .route("/api/auth/signup", post(routes::auth::signup))
        .route("/api/players", get(routes::players::list_players))
        .route(
            "/api/matches",
            get(routes::matches::list_matches).post(routes::matches::create_match),
        )
        .route("/api/matches/:id", get(routes::matches::get_match))
        .route("/api/matches/:id/result", post(routes::matches::record_result))
        .route(
            "/api/matches/:id/availability/:player_id",
            get(routes::availability::get_availability)
                .put(routes::availability::set_availability),
        )
        .route("/api/matches/:id/balance", post(routes::balance::balance_teams))
        .route(
            "/api/matches/:id/ratings",
            get(routes::ratings::list_ratings).post(routes::ratings::submit_rating),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
