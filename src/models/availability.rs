//! Availability records.

use serde::{Deserialize, Serialize};

use super::{MatchId, PlayerId, RecordId};

/// A player's declared availability for one match.
///
/// At most one record exists per (player, match) pair; a later declaration
/// overwrites the flag rather than adding a second record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Availability {
    pub id: RecordId,
    pub player_id: PlayerId,
    pub match_id: MatchId,
    pub available: bool,
}

/// Three-valued availability as seen by callers.
///
/// The reference behaviour collapsed "never declared" and "declared
/// unavailable" into `false`; the distinct `Undeclared` state is kept so
/// the UI can tell the two apart, and `is_available` preserves the old
/// boolean view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AvailabilityStatus {
    Undeclared,
    Available,
    Unavailable,
}

impl AvailabilityStatus {
    pub fn is_available(&self) -> bool {
        matches!(self, AvailabilityStatus::Available)
    }

    pub fn is_declared(&self) -> bool {
        !matches!(self, AvailabilityStatus::Undeclared)
    }
}

impl From<Option<bool>> for AvailabilityStatus {
    fn from(flag: Option<bool>) -> Self {
        match flag {
            None => AvailabilityStatus::Undeclared,
            Some(true) => AvailabilityStatus::Available,
            Some(false) => AvailabilityStatus::Unavailable,
        }
    }
}
