//! Peer rating records.

use serde::{Deserialize, Serialize};

use super::{MatchId, PlayerId, RecordId};

/// Lowest score a rater can give.
pub const MIN_SCORE: f64 = 0.0;

/// Highest score a rater can give.
pub const MAX_SCORE: f64 = 10.0;

/// One peer-submitted score for a player's performance in a match.
///
/// At most one record exists per (rater, player, match) triple, and a
/// record is immutable once created.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rating {
    pub id: RecordId,
    pub player_id: PlayerId,
    pub match_id: MatchId,
    pub rater_id: PlayerId,
    pub score: f64,
}

/// Whether a score is inside the accepted domain: 0 to 10 in half-point
/// steps.
pub fn is_valid_score(score: f64) -> bool {
    (MIN_SCORE..=MAX_SCORE).contains(&score) && (score * 2.0).fract() == 0.0
}
