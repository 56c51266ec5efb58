//! The club service: availability tracking, team balancing, and rating
//! aggregation over an injected [`ClubStore`].
//!
//! Every operation is a synchronous, single-step mutation: it either fully
//! applies or is rejected before any state changes. Rejections are domain
//! rule violations, never transient failures, so callers must not retry.

pub mod store;

pub use store::{ClubStore, MemoryStore};

use chrono::{DateTime, Utc};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::calculate::{mean, partition_by_rating, round_rating};
use crate::models::{
    is_valid_score, Availability, AvailabilityStatus, Match, MatchId, Player, PlayerId,
    PlayerProfile, Rating, Role, BASELINE_RATING,
};

/// Domain rule violations surfaced to the caller.
#[derive(Debug, Error)]
pub enum ClubError {
    #[error("match not found: {0}")]
    MatchNotFound(MatchId),

    #[error("player not found: {0}")]
    PlayerNotFound(PlayerId),

    #[error("email already registered: {0}")]
    EmailTaken(String),

    #[error("player {0} is not a manager")]
    NotAManager(PlayerId),

    #[error("match {0} is already completed")]
    MatchCompleted(MatchId),

    #[error("match {0} is not rateable")]
    MatchNotRateable(MatchId),

    #[error("rater {rater} and player {player} were not on opposing teams of match {match_id}")]
    NotOpponents {
        rater: PlayerId,
        player: PlayerId,
        match_id: MatchId,
    },

    #[error("you have already rated this player for this match")]
    AlreadyRated,

    #[error("score {0} is outside the 0-10 half-point scale")]
    InvalidScore(f64),
}

/// The two balanced sides of a match, hydrated into full player records.
#[derive(Debug, Clone)]
pub struct BalancedTeams {
    pub team_a: Vec<Player>,
    pub team_b: Vec<Player>,
}

/// Domain service over a storage backend.
pub struct Club<S: ClubStore> {
    store: S,
    baseline_rating: f64,
}

impl<S: ClubStore> Club<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            baseline_rating: BASELINE_RATING,
        }
    }

    /// Override the signup baseline rating (configurable per deployment).
    pub fn with_baseline_rating(mut self, baseline_rating: f64) -> Self {
        self.baseline_rating = baseline_rating;
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    // ── Accessors ────────────────────────────────────────────────

    pub fn players(&self) -> Vec<Player> {
        self.store.players()
    }

    pub fn player(&self, id: PlayerId) -> Result<Player, ClubError> {
        self.store.player(id).ok_or(ClubError::PlayerNotFound(id))
    }

    pub fn matches(&self) -> Vec<Match> {
        self.store.matches()
    }

    pub fn match_by_id(&self, id: MatchId) -> Result<Match, ClubError> {
        self.store
            .match_by_id(id)
            .ok_or(ClubError::MatchNotFound(id))
    }

    /// The player's current aggregated rating.
    pub fn average_rating(&self, player_id: PlayerId) -> Result<f64, ClubError> {
        Ok(self.player(player_id)?.average_rating)
    }

    // ── Membership ───────────────────────────────────────────────

    /// Mock credential check: look the player up by email.
    pub fn login(&self, email: &str) -> Option<Player> {
        self.store.player_by_email(email)
    }

    /// Register a new player with the baseline rating.
    pub fn signup(&mut self, profile: PlayerProfile) -> Result<Player, ClubError> {
        if self.store.player_by_email(&profile.email).is_some() {
            return Err(ClubError::EmailTaken(profile.email));
        }

        let player = self
            .store
            .insert_player(profile, Role::Player, self.baseline_rating);
        info!("Registered player {} ({})", player.full_name(), player.id);
        Ok(player)
    }

    // ── Match lifecycle ──────────────────────────────────────────

    /// Create an upcoming match, inviting every player-role member.
    pub fn create_match(
        &mut self,
        date: DateTime<Utc>,
        location: String,
        manager_id: PlayerId,
    ) -> Result<Match, ClubError> {
        let manager = self.player(manager_id)?;
        if !manager.is_manager() {
            return Err(ClubError::NotAManager(manager_id));
        }

        let invited: Vec<PlayerId> = self
            .store
            .players()
            .into_iter()
            .filter(|p| p.role == Role::Player)
            .map(|p| p.id)
            .collect();

        let m = self.store.insert_match(date, location, manager_id, invited);
        info!("Created match {} at {}", m.id, m.location);
        Ok(m)
    }

    /// Record the final result and move the match to its terminal state.
    pub fn record_result(&mut self, match_id: MatchId, result: String) -> Result<Match, ClubError> {
        let mut m = self.match_by_id(match_id)?;
        if m.is_completed() {
            return Err(ClubError::MatchCompleted(match_id));
        }

        m.complete(result);
        self.store.update_match(m.clone());
        info!("Match {} completed: {}", match_id, m.result.as_deref().unwrap_or(""));
        Ok(m)
    }

    // ── Availability tracking ────────────────────────────────────

    /// Upsert the (player, match) availability flag and mirror it into the
    /// match roster. Idempotent. Declaring availability discards any teams
    /// balanced from the previous snapshot.
    pub fn set_availability(
        &mut self,
        player_id: PlayerId,
        match_id: MatchId,
        available: bool,
    ) -> Result<Availability, ClubError> {
        self.player(player_id)?;
        let mut m = self.match_by_id(match_id)?;
        if !m.is_upcoming() {
            return Err(ClubError::MatchCompleted(match_id));
        }

        let record = self.store.upsert_availability(player_id, match_id, available);

        if available {
            // Late signups may not be on the invite list yet
            if !m.all_players.contains(&player_id) {
                m.all_players.push(player_id);
            }
            m.mark_available(player_id);
        } else {
            m.mark_unavailable(player_id);
        }
        m.clear_teams();
        self.store.update_match(m);

        debug!(
            "Availability for player {} on match {}: {}",
            player_id, match_id, available
        );
        Ok(record)
    }

    /// Current availability declaration for the (player, match) pair.
    pub fn availability_status(
        &self,
        player_id: PlayerId,
        match_id: MatchId,
    ) -> Result<AvailabilityStatus, ClubError> {
        self.match_by_id(match_id)?;
        let flag = self
            .store
            .availability(player_id, match_id)
            .map(|a| a.available);
        Ok(AvailabilityStatus::from(flag))
    }

    // ── Team balancing ───────────────────────────────────────────

    /// Partition the match's current availability snapshot into two teams
    /// with near-equal rating sums, overwriting any previous balancing.
    pub fn balance_teams(&mut self, match_id: MatchId) -> Result<BalancedTeams, ClubError> {
        let mut m = self.match_by_id(match_id)?;
        if !m.is_upcoming() {
            return Err(ClubError::MatchCompleted(match_id));
        }

        let rated: Vec<(PlayerId, f64)> = m
            .available_players
            .iter()
            .filter_map(|&id| match self.store.player(id) {
                Some(p) => Some((id, p.average_rating)),
                None => {
                    warn!("Match {} references unknown player {}", match_id, id);
                    None
                }
            })
            .collect();

        let partition = partition_by_rating(&rated);
        info!(
            "Balanced match {}: {} v {} (sums {:.1} / {:.1})",
            match_id,
            partition.team_a.len(),
            partition.team_b.len(),
            partition.sum_a,
            partition.sum_b,
        );

        m.team_a = partition.team_a;
        m.team_b = partition.team_b;
        self.store.update_match(m.clone());

        Ok(BalancedTeams {
            team_a: self.hydrate(&m.team_a),
            team_b: self.hydrate(&m.team_b),
        })
    }

    /// Resolve player ids into full records, skipping dangling references.
    pub fn hydrate(&self, ids: &[PlayerId]) -> Vec<Player> {
        ids.iter()
            .filter_map(|&id| self.store.player(id))
            .collect()
    }

    // ── Rating aggregation ───────────────────────────────────────

    /// Submit a peer rating and recompute the rated player's average over
    /// every score they have ever received.
    pub fn submit_rating(
        &mut self,
        rater_id: PlayerId,
        player_id: PlayerId,
        match_id: MatchId,
        score: f64,
    ) -> Result<Rating, ClubError> {
        if !is_valid_score(score) {
            return Err(ClubError::InvalidScore(score));
        }

        let m = self.match_by_id(match_id)?;
        if !m.is_completed() {
            return Err(ClubError::MatchNotRateable(match_id));
        }

        self.player(rater_id)?;
        self.player(player_id)?;

        let opponents = (m.on_team_a(rater_id) && m.on_team_b(player_id))
            || (m.on_team_b(rater_id) && m.on_team_a(player_id));
        if !opponents {
            return Err(ClubError::NotOpponents {
                rater: rater_id,
                player: player_id,
                match_id,
            });
        }

        let rating = self
            .store
            .insert_rating_if_absent(rater_id, player_id, match_id, score)
            .ok_or(ClubError::AlreadyRated)?;

        // Full recomputation over the complete history, not a running
        // average: correct regardless of submission order.
        let scores = self.store.scores_for_player(player_id);
        if let Some(avg) = mean(&scores) {
            self.store.set_player_rating(player_id, round_rating(avg));
        }

        debug!(
            "Rating recorded: {} scored {} by {} in match {}",
            player_id, score, rater_id, match_id
        );
        Ok(rating)
    }

    /// All ratings submitted for one match.
    pub fn ratings_for_match(&self, match_id: MatchId) -> Result<Vec<Rating>, ClubError> {
        self.match_by_id(match_id)?;
        Ok(self.store.ratings_for_match(match_id))
    }
}
