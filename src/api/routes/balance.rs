//! Team balancing route.

use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;

use crate::api::state::AppState;
use crate::api::ApiError;
use crate::models::{MatchId, Player};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceResponse {
    pub team_a: Vec<Player>,
    pub team_b: Vec<Player>,
}

pub async fn balance_teams(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<BalanceResponse>, ApiError> {
    let mut club = state.club.write().await;
    let teams = club.balance_teams(MatchId::new(id))?;
    Ok(Json(BalanceResponse {
        team_a: teams.team_a,
        team_b: teams.team_b,
    }))
}
