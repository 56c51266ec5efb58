//! Match listing and lifecycle routes.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::api::state::AppState;
use crate::api::ApiError;
use crate::club::{Club, ClubStore};
use crate::models::{Match, MatchId, MatchStatus, Player, PlayerId};

/// A match with its rosters hydrated into full player records, matching
/// the wire shape the UI consumes.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResponse {
    pub id: MatchId,
    pub date: DateTime<Utc>,
    pub location: String,
    pub manager_id: PlayerId,
    pub status: MatchStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<String>,
    pub all_players: Vec<Player>,
    pub available_players: Vec<Player>,
    pub team_a: Vec<Player>,
    pub team_b: Vec<Player>,
}

pub(crate) fn match_response<S: ClubStore>(club: &Club<S>, m: &Match) -> MatchResponse {
    MatchResponse {
        id: m.id,
        date: m.date,
        location: m.location.clone(),
        manager_id: m.manager_id,
        status: m.status,
        result: m.result.clone(),
        all_players: club.hydrate(&m.all_players),
        available_players: club.hydrate(&m.available_players),
        team_a: club.hydrate(&m.team_a),
        team_b: club.hydrate(&m.team_b),
    }
}

pub async fn list_matches(
    State(state): State<AppState>,
) -> Result<Json<Vec<MatchResponse>>, ApiError> {
    let club = state.club.read().await;
    let mut matches = club.matches();
    // Soonest upcoming first, most recent completed last
    matches.sort_by_key(|m| m.date);
    let responses = matches.iter().map(|m| match_response(&club, m)).collect();
    Ok(Json(responses))
}

pub async fn get_match(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<MatchResponse>, ApiError> {
    let club = state.club.read().await;
    let m = club.match_by_id(MatchId::new(id))?;
    Ok(Json(match_response(&club, &m)))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMatchRequest {
    pub date: DateTime<Utc>,
    pub location: String,
    pub manager_id: PlayerId,
}

pub async fn create_match(
    State(state): State<AppState>,
    Json(req): Json<CreateMatchRequest>,
) -> Result<(StatusCode, Json<MatchResponse>), ApiError> {
    let mut club = state.club.write().await;
    let m = club.create_match(req.date, req.location, req.manager_id)?;
    Ok((StatusCode::CREATED, Json(match_response(&club, &m))))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordResultRequest {
    pub result: String,
}

pub async fn record_result(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(req): Json<RecordResultRequest>,
) -> Result<Json<MatchResponse>, ApiError> {
    let mut club = state.club.write().await;
    let m = club.record_result(MatchId::new(id), req.result)?;
    Ok(Json(match_response(&club, &m)))
}

#[cfg(test)]
mod tests {
    use crate::api::build_router;
    use crate::api::state::AppState;
    use crate::club::{Club, ClubStore, MemoryStore};
    use crate::models::{Foot, PlayerProfile, Role};
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use serde_json::{json, Value};
    use tower::util::ServiceExt;

    fn profile(name: &str) -> PlayerProfile {
        PlayerProfile {
            first_name: name.to_string(),
            last_name: "Test".to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            dob: chrono::NaiveDate::from_ymd_opt(1993, 4, 2).unwrap(),
            favorite_foot: Foot::Right,
            favorite_position: "Forward".to_string(),
        }
    }

    /// Manager (id 1) plus three players (ids 2..=4).
    fn seeded_state() -> AppState {
        let mut store = MemoryStore::new();
        store.insert_player(profile("Boss"), Role::Manager, 9.0);
        for name in ["Ann", "Ben", "Cal"] {
            store.insert_player(profile(name), Role::Player, 7.0);
        }
        AppState::new(Club::new(store))
    }

    async fn get_json(app: axum::Router, uri: &str) -> (StatusCode, Value) {
        let resp = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = resp.status();
        let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);
        (status, json)
    }

    async fn post_json(app: axum::Router, uri: &str, body: Value) -> (StatusCode, Value) {
        let resp = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header("content-type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = resp.status();
        let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);
        (status, json)
    }

    fn create_body() -> Value {
        json!({
            "date": "2026-09-12T18:00:00Z",
            "location": "City Arena",
            "managerId": 1
        })
    }

    #[tokio::test]
    async fn test_create_and_list_matches() {
        let state = seeded_state();

        let (status, created) = post_json(
            build_router(state.clone()),
            "/api/matches",
            create_body(),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(created["status"], "upcoming");
        assert_eq!(created["allPlayers"].as_array().unwrap().len(), 3);
        assert_eq!(created["allPlayers"][0]["firstName"], "Ann");

        let (status, listed) = get_json(build_router(state), "/api/matches").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(listed.as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_get_match_not_found() {
        let (status, body) = get_json(build_router(seeded_state()), "/api/matches/99").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_create_match_requires_manager() {
        let mut body = create_body();
        body["managerId"] = json!(2);
        let (status, body) = post_json(build_router(seeded_state()), "/api/matches", body).await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["error"]["code"], "CONFLICT");
    }

    #[tokio::test]
    async fn test_record_result_completes_once() {
        let state = seeded_state();
        post_json(build_router(state.clone()), "/api/matches", create_body()).await;

        let (status, body) = post_json(
            build_router(state.clone()),
            "/api/matches/1/result",
            json!({"result": "3-2"}),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "completed");
        assert_eq!(body["result"], "3-2");

        let (status, _) = post_json(
            build_router(state),
            "/api/matches/1/result",
            json!({"result": "4-2"}),
        )
        .await;
        assert_eq!(status, StatusCode::CONFLICT);
    }
}
