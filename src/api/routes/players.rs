//! Player listing route.

use axum::extract::State;
use axum::Json;

use crate::api::state::AppState;
use crate::api::ApiError;
use crate::models::Player;

pub async fn list_players(State(state): State<AppState>) -> Result<Json<Vec<Player>>, ApiError> {
    let club = state.club.read().await;
    Ok(Json(club.players()))
}

#[cfg(test)]
mod tests {
    use crate::api::build_router;
    use crate::api::state::AppState;
    use crate::club::{Club, ClubStore, MemoryStore};
    use crate::models::{Foot, PlayerProfile, Role};
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use serde_json::Value;
    use tower::util::ServiceExt;

    #[tokio::test]
    async fn test_list_players() {
        let mut store = MemoryStore::new();
        store.insert_player(
            PlayerProfile {
                first_name: "Ann".to_string(),
                last_name: "Field".to_string(),
                email: "ann@example.com".to_string(),
                dob: chrono::NaiveDate::from_ymd_opt(1996, 2, 2).unwrap(),
                favorite_foot: Foot::Left,
                favorite_position: "Defender".to_string(),
            },
            Role::Player,
            7.0,
        );
        let state = AppState::new(Club::new(store));

        let resp = build_router(state)
            .oneshot(
                Request::builder()
                    .uri("/api/players")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);

        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: Value = serde_json::from_slice(&bytes).unwrap();
        let players = json.as_array().unwrap();
        assert_eq!(players.len(), 1);
        assert_eq!(players[0]["firstName"], "Ann");
        assert_eq!(players[0]["averageRating"], 7.0);
        assert_eq!(players[0]["role"], "player");
    }
}
