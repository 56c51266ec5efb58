//! Availability declaration routes.

use axum::extract::{Path, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::api::state::AppState;
use crate::api::ApiError;
use crate::models::{AvailabilityStatus, MatchId, PlayerId};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityResponse {
    pub player_id: PlayerId,
    pub match_id: MatchId,
    pub status: AvailabilityStatus,
    /// The reference boolean view: `undeclared` reads as false
    pub available: bool,
}

pub async fn get_availability(
    State(state): State<AppState>,
    Path((match_id, player_id)): Path<(u64, u64)>,
) -> Result<Json<AvailabilityResponse>, ApiError> {
    let club = state.club.read().await;
    let player_id = PlayerId::new(player_id);
    let match_id = MatchId::new(match_id);
    let status = club.availability_status(player_id, match_id)?;
    Ok(Json(AvailabilityResponse {
        player_id,
        match_id,
        status,
        available: status.is_available(),
    }))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetAvailabilityRequest {
    pub available: bool,
}

pub async fn set_availability(
    State(state): State<AppState>,
    Path((match_id, player_id)): Path<(u64, u64)>,
    Json(req): Json<SetAvailabilityRequest>,
) -> Result<Json<AvailabilityResponse>, ApiError> {
    let mut club = state.club.write().await;
    let player_id = PlayerId::new(player_id);
    let match_id = MatchId::new(match_id);
    let record = club.set_availability(player_id, match_id, req.available)?;
    let status = AvailabilityStatus::from(Some(record.available));
    Ok(Json(AvailabilityResponse {
        player_id,
        match_id,
        status,
        available: status.is_available(),
    }))
}
