//! Player model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::PlayerId;

/// Rating assigned to a player at signup, before any peer ratings exist.
pub const BASELINE_RATING: f64 = 7.0;

/// Role of a club member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Player,
    Manager,
}

/// Preferred foot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Foot {
    Left,
    Right,
    Both,
}

/// A club member.
///
/// `average_rating` is derived state: it is always the mean of the rating
/// scores the player has received, rounded to one decimal. Only the rating
/// aggregation path writes it after signup.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: PlayerId,

    pub first_name: String,

    pub last_name: String,

    pub email: String,

    /// Date of birth
    pub dob: NaiveDate,

    pub favorite_foot: Foot,

    /// Free-text position, e.g. "Midfielder"
    pub favorite_position: String,

    pub role: Role,

    pub average_rating: f64,
}

/// Profile fields supplied at signup; the store assigns the id and the
/// service assigns role and baseline rating.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerProfile {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub dob: NaiveDate,
    pub favorite_foot: Foot,
    pub favorite_position: String,
}

impl Player {
    /// Create a player from a signup profile.
    pub fn from_profile(id: PlayerId, profile: PlayerProfile, role: Role) -> Self {
        Self {
            id,
            first_name: profile.first_name,
            last_name: profile.last_name,
            email: profile.email,
            dob: profile.dob,
            favorite_foot: profile.favorite_foot,
            favorite_position: profile.favorite_position,
            role,
            average_rating: BASELINE_RATING,
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn is_manager(&self) -> bool {
        self.role == Role::Manager
    }
}
