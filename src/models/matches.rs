//! Match model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{MatchId, PlayerId};

/// Lifecycle of a match. The transition is one-directional:
/// `Upcoming` -> `Completed`, and `Completed` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchStatus {
    Upcoming,
    Completed,
}

/// A scheduled or played match.
///
/// Rosters hold player ids; the API layer hydrates them into full player
/// records. Invariant: `available_players` is a subset of `all_players`,
/// and `team_a`/`team_b` are disjoint subsets of the availability snapshot
/// taken when the teams were last balanced.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    pub id: MatchId,

    /// Scheduled kick-off
    pub date: DateTime<Utc>,

    pub location: String,

    pub manager_id: PlayerId,

    pub status: MatchStatus,

    /// Free-text result, e.g. "3-2"; present iff the match is completed
    pub result: Option<String>,

    /// Everyone invited to the match
    pub all_players: Vec<PlayerId>,

    /// Players who declared themselves available
    pub available_players: Vec<PlayerId>,

    pub team_a: Vec<PlayerId>,

    pub team_b: Vec<PlayerId>,
}

impl Match {
    /// Create an upcoming match with the given invited roster.
    pub fn new(
        id: MatchId,
        date: DateTime<Utc>,
        location: String,
        manager_id: PlayerId,
        all_players: Vec<PlayerId>,
    ) -> Self {
        Self {
            id,
            date,
            location,
            manager_id,
            status: MatchStatus::Upcoming,
            result: None,
            all_players,
            available_players: Vec::new(),
            team_a: Vec::new(),
            team_b: Vec::new(),
        }
    }

    pub fn is_upcoming(&self) -> bool {
        self.status == MatchStatus::Upcoming
    }

    pub fn is_completed(&self) -> bool {
        self.status == MatchStatus::Completed
    }

    /// Record the result and transition to `Completed`.
    pub fn complete(&mut self, result: String) {
        self.result = Some(result);
        self.status = MatchStatus::Completed;
    }

    /// Add a player to the availability list, once.
    pub fn mark_available(&mut self, player_id: PlayerId) {
        if !self.available_players.contains(&player_id) {
            self.available_players.push(player_id);
        }
    }

    /// Remove a player from the availability list, if present.
    pub fn mark_unavailable(&mut self, player_id: PlayerId) {
        self.available_players.retain(|&p| p != player_id);
    }

    /// Discard any previously balanced teams.
    pub fn clear_teams(&mut self) {
        self.team_a.clear();
        self.team_b.clear();
    }

    /// Whether the player was fielded on team A.
    pub fn on_team_a(&self, player_id: PlayerId) -> bool {
        self.team_a.contains(&player_id)
    }

    /// Whether the player was fielded on team B.
    pub fn on_team_b(&self, player_id: PlayerId) -> bool {
        self.team_b.contains(&player_id)
    }
}
