//! Rating submission and listing routes.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use crate::api::state::AppState;
use crate::api::ApiError;
use crate::models::{MatchId, PlayerId, Rating};

pub async fn list_ratings(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<Vec<Rating>>, ApiError> {
    let club = state.club.read().await;
    let ratings = club.ratings_for_match(MatchId::new(id))?;
    Ok(Json(ratings))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitRatingRequest {
    pub rater_id: PlayerId,
    pub player_id: PlayerId,
    pub score: f64,
}

pub async fn submit_rating(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(req): Json<SubmitRatingRequest>,
) -> Result<(StatusCode, Json<Rating>), ApiError> {
    let mut club = state.club.write().await;
    let rating = club.submit_rating(req.rater_id, req.player_id, MatchId::new(id), req.score)?;
    Ok((StatusCode::CREATED, Json(rating)))
}

#[cfg(test)]
mod tests {
    use crate::api::build_router;
    use crate::api::state::AppState;
    use crate::club::{Club, ClubStore, MemoryStore};
    use crate::models::{Foot, MatchId, PlayerId, PlayerProfile, Role};
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use serde_json::{json, Value};
    use tower::util::ServiceExt;

    /// A completed match: Ann (id 2) on team A, Ben (id 3) on team B.
    fn seeded_state() -> AppState {
        let mut store = MemoryStore::new();
        let profile = |name: &str| PlayerProfile {
            first_name: name.to_string(),
            last_name: "Test".to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            dob: chrono::NaiveDate::from_ymd_opt(1990, 5, 17).unwrap(),
            favorite_foot: Foot::Both,
            favorite_position: "Midfielder".to_string(),
        };
        store.insert_player(profile("Boss"), Role::Manager, 9.0);
        store.insert_player(profile("Ann"), Role::Player, 7.0);
        store.insert_player(profile("Ben"), Role::Player, 7.0);

        store.insert_match(
            chrono::Utc::now(),
            "Grand Park".to_string(),
            PlayerId::new(1),
            vec![PlayerId::new(2), PlayerId::new(3)],
        );
        let mut m = store.match_by_id(MatchId::new(1)).unwrap();
        m.team_a = vec![PlayerId::new(2)];
        m.team_b = vec![PlayerId::new(3)];
        m.complete("1-0".to_string());
        store.update_match(m);

        // Second match, still upcoming
        store.insert_match(
            chrono::Utc::now(),
            "City Arena".to_string(),
            PlayerId::new(1),
            vec![PlayerId::new(2), PlayerId::new(3)],
        );

        AppState::new(Club::new(store))
    }

    async fn get_json(app: axum::Router, uri: &str) -> (StatusCode, Value) {
        let resp = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = resp.status();
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: Value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
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
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: Value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, json)
    }

    fn rating_body(score: f64) -> Value {
        json!({"raterId": 2, "playerId": 3, "score": score})
    }

    #[tokio::test]
    async fn test_submit_rating_updates_average() {
        let state = seeded_state();

        let (status, body) = post_json(
            build_router(state.clone()),
            "/api/matches/1/ratings",
            rating_body(8.0),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["score"], 8.0);
        assert_eq!(body["raterId"], 2);

        let (_, players) = get_json(build_router(state), "/api/players").await;
        let ben = players
            .as_array()
            .unwrap()
            .iter()
            .find(|p| p["firstName"] == "Ben")
            .unwrap();
        assert_eq!(ben["averageRating"], 8.0);
    }

    #[tokio::test]
    async fn test_duplicate_rating_conflicts() {
        let state = seeded_state();
        post_json(
            build_router(state.clone()),
            "/api/matches/1/ratings",
            rating_body(8.0),
        )
        .await;

        let (status, body) = post_json(
            build_router(state),
            "/api/matches/1/ratings",
            rating_body(5.0),
        )
        .await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["error"]["code"], "CONFLICT");
    }

    #[tokio::test]
    async fn test_rating_upcoming_match_conflicts() {
        let (status, _) = post_json(
            build_router(seeded_state()),
            "/api/matches/2/ratings",
            rating_body(8.0),
        )
        .await;
        assert_eq!(status, StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn test_invalid_score_is_bad_request() {
        let (status, body) = post_json(
            build_router(seeded_state()),
            "/api/matches/1/ratings",
            rating_body(7.3),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "BAD_REQUEST");
    }

    #[tokio::test]
    async fn test_list_ratings_for_match() {
        let state = seeded_state();
        post_json(
            build_router(state.clone()),
            "/api/matches/1/ratings",
            rating_body(8.5),
        )
        .await;

        let (status, body) = get_json(build_router(state), "/api/matches/1/ratings").await;
        assert_eq!(status, StatusCode::OK);
        let ratings = body.as_array().unwrap();
        assert_eq!(ratings.len(), 1);
        assert_eq!(ratings[0]["playerId"], 3);
        assert_eq!(ratings[0]["matchId"], 1);
    }
}
