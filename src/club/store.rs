//! Storage abstraction for club state.
//!
//! The service talks to a [`ClubStore`] so the same logic runs against the
//! in-memory store used by the server and tests, or any future persistent
//! backend. A persistent implementation must keep `insert_rating_if_absent`
//! a single atomic operation (unique key on the rater/player/match triple),
//! otherwise the duplicate-rating guarantee is lost under concurrent
//! writers.

use chrono::{DateTime, Utc};

use crate::models::{
    Availability, Match, MatchId, Player, PlayerId, PlayerProfile, Rating, RecordId, Role,
};

/// Data access operations the club service needs.
pub trait ClubStore: Send + Sync {
    fn players(&self) -> Vec<Player>;

    fn player(&self, id: PlayerId) -> Option<Player>;

    fn player_by_email(&self, email: &str) -> Option<Player>;

    /// Insert a new player, assigning the next id.
    fn insert_player(&mut self, profile: PlayerProfile, role: Role, average_rating: f64)
        -> Player;

    /// Overwrite a player's derived average rating. Returns false for an
    /// unknown id.
    fn set_player_rating(&mut self, id: PlayerId, average_rating: f64) -> bool;

    fn matches(&self) -> Vec<Match>;

    fn match_by_id(&self, id: MatchId) -> Option<Match>;

    /// Insert a new upcoming match, assigning the next id.
    fn insert_match(
        &mut self,
        date: DateTime<Utc>,
        location: String,
        manager_id: PlayerId,
        all_players: Vec<PlayerId>,
    ) -> Match;

    /// Replace a stored match wholesale. Returns false for an unknown id.
    fn update_match(&mut self, updated: Match) -> bool;

    fn availability(&self, player_id: PlayerId, match_id: MatchId) -> Option<Availability>;

    /// Insert or overwrite the (player, match) availability flag; never
    /// creates a second record for the same pair.
    fn upsert_availability(
        &mut self,
        player_id: PlayerId,
        match_id: MatchId,
        available: bool,
    ) -> Availability;

    fn ratings_for_match(&self, match_id: MatchId) -> Vec<Rating>;

    /// Every score the player has received, across all matches.
    fn scores_for_player(&self, player_id: PlayerId) -> Vec<f64>;

    /// Atomic check-then-insert keyed by (rater, player, match).
    /// Returns `None` when a rating for the triple already exists.
    fn insert_rating_if_absent(
        &mut self,
        rater_id: PlayerId,
        player_id: PlayerId,
        match_id: MatchId,
        score: f64,
    ) -> Option<Rating>;
}

/// In-memory store with auto-incrementing ids.
#[derive(Debug, Default)]
pub struct MemoryStore {
    players: Vec<Player>,
    matches: Vec<Match>,
    availabilities: Vec<Availability>,
    ratings: Vec<Rating>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a store from snapshot data, e.g. loaded from disk.
    pub fn from_parts(
        players: Vec<Player>,
        matches: Vec<Match>,
        availabilities: Vec<Availability>,
        ratings: Vec<Rating>,
    ) -> Self {
        Self {
            players,
            matches,
            availabilities,
            ratings,
        }
    }

    /// Borrow the raw collections for snapshotting.
    pub fn parts(&self) -> (&[Player], &[Match], &[Availability], &[Rating]) {
        (
            &self.players,
            &self.matches,
            &self.availabilities,
            &self.ratings,
        )
    }

    fn next_player_id(&self) -> PlayerId {
        let max = self.players.iter().map(|p| p.id.as_u64()).max().unwrap_or(0);
        PlayerId::new(max + 1)
    }

    fn next_match_id(&self) -> MatchId {
        let max = self.matches.iter().map(|m| m.id.as_u64()).max().unwrap_or(0);
        MatchId::new(max + 1)
    }

    fn next_availability_id(&self) -> RecordId {
        let max = self
            .availabilities
            .iter()
            .map(|a| a.id.as_u64())
            .max()
            .unwrap_or(0);
        RecordId::new(max + 1)
    }

    fn next_rating_id(&self) -> RecordId {
        let max = self.ratings.iter().map(|r| r.id.as_u64()).max().unwrap_or(0);
        RecordId::new(max + 1)
    }
}

impl ClubStore for MemoryStore {
    fn players(&self) -> Vec<Player> {
        self.players.clone()
    }

    fn player(&self, id: PlayerId) -> Option<Player> {
        self.players.iter().find(|p| p.id == id).cloned()
    }

    fn player_by_email(&self, email: &str) -> Option<Player> {
        self.players
            .iter()
            .find(|p| p.email.eq_ignore_ascii_case(email))
            .cloned()
    }

    fn insert_player(
        &mut self,
        profile: PlayerProfile,
        role: Role,
        average_rating: f64,
    ) -> Player {
        let mut player = Player::from_profile(self.next_player_id(), profile, role);
        player.average_rating = average_rating;
        self.players.push(player.clone());
        player
    }

    fn set_player_rating(&mut self, id: PlayerId, average_rating: f64) -> bool {
        match self.players.iter_mut().find(|p| p.id == id) {
            Some(player) => {
                player.average_rating = average_rating;
                true
            }
            None => false,
        }
    }

    fn matches(&self) -> Vec<Match> {
        self.matches.clone()
    }

    fn match_by_id(&self, id: MatchId) -> Option<Match> {
        self.matches.iter().find(|m| m.id == id).cloned()
    }

    fn insert_match(
        &mut self,
        date: DateTime<Utc>,
        location: String,
        manager_id: PlayerId,
        all_players: Vec<PlayerId>,
    ) -> Match {
        let m = Match::new(self.next_match_id(), date, location, manager_id, all_players);
        self.matches.push(m.clone());
        m
    }

    fn update_match(&mut self, updated: Match) -> bool {
        match self.matches.iter_mut().find(|m| m.id == updated.id) {
            Some(slot) => {
                *slot = updated;
                true
            }
            None => false,
        }
    }

    fn availability(&self, player_id: PlayerId, match_id: MatchId) -> Option<Availability> {
        self.availabilities
            .iter()
            .find(|a| a.player_id == player_id && a.match_id == match_id)
            .cloned()
    }

    fn upsert_availability(
        &mut self,
        player_id: PlayerId,
        match_id: MatchId,
        available: bool,
    ) -> Availability {
        if let Some(existing) = self
            .availabilities
            .iter_mut()
            .find(|a| a.player_id == player_id && a.match_id == match_id)
        {
            existing.available = available;
            return existing.clone();
        }

        let record = Availability {
            id: self.next_availability_id(),
            player_id,
            match_id,
            available,
        };
        self.availabilities.push(record.clone());
        record
    }

    fn ratings_for_match(&self, match_id: MatchId) -> Vec<Rating> {
        self.ratings
            .iter()
            .filter(|r| r.match_id == match_id)
            .cloned()
            .collect()
    }

    fn scores_for_player(&self, player_id: PlayerId) -> Vec<f64> {
        self.ratings
            .iter()
            .filter(|r| r.player_id == player_id)
            .map(|r| r.score)
            .collect()
    }

    fn insert_rating_if_absent(
        &mut self,
        rater_id: PlayerId,
        player_id: PlayerId,
        match_id: MatchId,
        score: f64,
    ) -> Option<Rating> {
        let exists = self.ratings.iter().any(|r| {
            r.rater_id == rater_id && r.player_id == player_id && r.match_id == match_id
        });
        if exists {
            return None;
        }

        let rating = Rating {
            id: self.next_rating_id(),
            player_id,
            match_id,
            rater_id,
            score,
        };
        self.ratings.push(rating.clone());
        Some(rating)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn profile(email: &str) -> PlayerProfile {
        PlayerProfile {
            first_name: "Test".to_string(),
            last_name: "Player".to_string(),
            email: email.to_string(),
            dob: NaiveDate::from_ymd_opt(1995, 3, 1).unwrap(),
            favorite_foot: crate::models::Foot::Right,
            favorite_position: "Defender".to_string(),
        }
    }

    #[test]
    fn test_insert_player_assigns_sequential_ids() {
        let mut store = MemoryStore::new();
        let a = store.insert_player(profile("a@example.com"), Role::Player, 7.0);
        let b = store.insert_player(profile("b@example.com"), Role::Player, 7.0);
        assert_eq!(a.id, PlayerId::new(1));
        assert_eq!(b.id, PlayerId::new(2));
    }

    #[test]
    fn test_player_lookup_by_email_is_case_insensitive() {
        let mut store = MemoryStore::new();
        store.insert_player(profile("ada@example.com"), Role::Player, 7.0);
        assert!(store.player_by_email("Ada@Example.COM").is_some());
        assert!(store.player_by_email("missing@example.com").is_none());
    }

    #[test]
    fn test_upsert_availability_overwrites_not_duplicates() {
        let mut store = MemoryStore::new();
        let first = store.upsert_availability(PlayerId::new(1), MatchId::new(1), true);
        let second = store.upsert_availability(PlayerId::new(1), MatchId::new(1), false);

        assert_eq!(first.id, second.id);
        assert!(!second.available);
        let (_, _, availabilities, _) = store.parts();
        assert_eq!(availabilities.len(), 1);
    }

    #[test]
    fn test_insert_rating_if_absent_rejects_duplicate_triple() {
        let mut store = MemoryStore::new();
        let first =
            store.insert_rating_if_absent(PlayerId::new(1), PlayerId::new(2), MatchId::new(1), 8.0);
        assert!(first.is_some());

        let dup =
            store.insert_rating_if_absent(PlayerId::new(1), PlayerId::new(2), MatchId::new(1), 6.0);
        assert!(dup.is_none());

        // A different rater for the same player is a new triple
        let other =
            store.insert_rating_if_absent(PlayerId::new(3), PlayerId::new(2), MatchId::new(1), 6.0);
        assert!(other.is_some());
    }

    #[test]
    fn test_scores_for_player_spans_matches() {
        let mut store = MemoryStore::new();
        store.insert_rating_if_absent(PlayerId::new(1), PlayerId::new(2), MatchId::new(1), 8.0);
        store.insert_rating_if_absent(PlayerId::new(3), PlayerId::new(2), MatchId::new(2), 6.0);
        store.insert_rating_if_absent(PlayerId::new(1), PlayerId::new(4), MatchId::new(1), 9.0);

        let mut scores = store.scores_for_player(PlayerId::new(2));
        scores.sort_by(|a, b| a.partial_cmp(b).unwrap());
        assert_eq!(scores, vec![6.0, 8.0]);
    }

    #[test]
    fn test_from_parts_continues_id_sequence() {
        let mut store = MemoryStore::from_parts(
            vec![Player::from_profile(
                PlayerId::new(5),
                profile("a@example.com"),
                Role::Player,
            )],
            Vec::new(),
            Vec::new(),
            Vec::new(),
        );
        let next = store.insert_player(profile("b@example.com"), Role::Player, 7.0);
        assert_eq!(next.id, PlayerId::new(6));
    }

    #[test]
    fn test_update_match_unknown_id() {
        let mut store = MemoryStore::new();
        let m = Match::new(
            MatchId::new(9),
            chrono::Utc::now(),
            "Nowhere".to_string(),
            PlayerId::new(1),
            Vec::new(),
        );
        assert!(!store.update_match(m));
    }
}
