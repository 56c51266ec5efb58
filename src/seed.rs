//! Demo dataset for local development.
//!
//! Populates a store with a manager, seven rated players, one upcoming
//! match with declared availability, and one completed match that already
//! carries teams, a result, and a couple of ratings. `serve` against a
//! seeded data directory gives the UI something to render immediately.

use chrono::{Duration, NaiveDate, Utc};
use tracing::info;

use crate::club::{ClubStore, MemoryStore};
use crate::models::{Foot, MatchId, PlayerId, PlayerProfile, Role};

struct SeedPlayer {
    first_name: &'static str,
    last_name: &'static str,
    email: &'static str,
    dob: (i32, u32, u32),
    foot: Foot,
    position: &'static str,
    role: Role,
    average_rating: f64,
}

const SEED_PLAYERS: &[SeedPlayer] = &[
    SeedPlayer {
        first_name: "Leo",
        last_name: "Messi",
        email: "manager@weplay.com",
        dob: (1987, 6, 24),
        foot: Foot::Left,
        position: "Forward",
        role: Role::Manager,
        average_rating: 9.8,
    },
    SeedPlayer {
        first_name: "Cristiano",
        last_name: "Ronaldo",
        email: "player@weplay.com",
        dob: (1985, 2, 5),
        foot: Foot::Right,
        position: "Forward",
        role: Role::Player,
        average_rating: 9.5,
    },
    SeedPlayer {
        first_name: "Neymar",
        last_name: "Jr",
        email: "player2@weplay.com",
        dob: (1992, 2, 5),
        foot: Foot::Both,
        position: "Winger",
        role: Role::Player,
        average_rating: 9.2,
    },
    SeedPlayer {
        first_name: "Kylian",
        last_name: "Mbappe",
        email: "player3@weplay.com",
        dob: (1998, 12, 20),
        foot: Foot::Right,
        position: "Forward",
        role: Role::Player,
        average_rating: 9.4,
    },
    SeedPlayer {
        first_name: "Kevin",
        last_name: "De Bruyne",
        email: "player4@weplay.com",
        dob: (1991, 6, 28),
        foot: Foot::Right,
        position: "Midfielder",
        role: Role::Player,
        average_rating: 9.6,
    },
    SeedPlayer {
        first_name: "Virgil",
        last_name: "van Dijk",
        email: "player5@weplay.com",
        dob: (1991, 7, 8),
        foot: Foot::Right,
        position: "Defender",
        role: Role::Player,
        average_rating: 9.1,
    },
    SeedPlayer {
        first_name: "Sadio",
        last_name: "Mane",
        email: "player6@weplay.com",
        dob: (1992, 4, 10),
        foot: Foot::Right,
        position: "Forward",
        role: Role::Player,
        average_rating: 8.9,
    },
    SeedPlayer {
        first_name: "Mohamed",
        last_name: "Salah",
        email: "player7@weplay.com",
        dob: (1992, 6, 15),
        foot: Foot::Left,
        position: "Forward",
        role: Role::Player,
        average_rating: 9.0,
    },
];

/// Build a freshly seeded in-memory store.
pub fn seed_store() -> MemoryStore {
    let mut store = MemoryStore::new();

    for p in SEED_PLAYERS {
        let (y, m, d) = p.dob;
        let profile = PlayerProfile {
            first_name: p.first_name.to_string(),
            last_name: p.last_name.to_string(),
            email: p.email.to_string(),
            // Dates are compile-time constants
            dob: NaiveDate::from_ymd_opt(y, m, d).unwrap(),
            favorite_foot: p.foot,
            favorite_position: p.position.to_string(),
        };
        store.insert_player(profile, p.role, p.average_rating);
    }

    let manager = PlayerId::new(1);
    let pid = PlayerId::new;

    // Upcoming match in three days: five invited, four declared available,
    // one declared out.
    store.insert_match(
        Utc::now() + Duration::days(3),
        "City Arena".to_string(),
        manager,
        vec![pid(2), pid(3), pid(4), pid(5), pid(6)],
    );
    for player_id in [2, 3, 4, 5] {
        store.upsert_availability(pid(player_id), MatchId::new(1), true);
    }
    store.upsert_availability(pid(6), MatchId::new(1), false);
    let mut upcoming = store
        .match_by_id(MatchId::new(1))
        .expect("match just inserted");
    for player_id in [2, 3, 4, 5] {
        upcoming.mark_available(pid(player_id));
    }
    store.update_match(upcoming);

    // Completed match five days ago with teams and two cross-team ratings.
    store.insert_match(
        Utc::now() - Duration::days(5),
        "Grand Park".to_string(),
        manager,
        vec![pid(2), pid(3), pid(4), pid(5)],
    );
    let mut completed = store
        .match_by_id(MatchId::new(2))
        .expect("match just inserted");
    completed.team_a = vec![pid(2), pid(4)];
    completed.team_b = vec![pid(3), pid(5)];
    completed.complete("3-2".to_string());
    store.update_match(completed);

    store.insert_rating_if_absent(pid(3), pid(2), MatchId::new(2), 8.0);
    store.insert_rating_if_absent(pid(2), pid(3), MatchId::new(2), 9.0);

    let (players, matches, _, ratings) = store.parts();
    info!(
        players = players.len(),
        matches = matches.len(),
        ratings = ratings.len(),
        "Seeded demo dataset"
    );

    store
}
