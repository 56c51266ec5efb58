use std::sync::Arc;

use crate::club::{Club, MemoryStore};

/// Shared handle to the club service.
///
/// One lock guards all mutable state, so every operation's
/// check-then-mutate sequence runs without interleaving.
pub type SharedClub = Arc<tokio::sync::RwLock<Club<MemoryStore>>>;

#[derive(Clone)]
pub struct AppState {
    pub club: SharedClub,
}

impl AppState {
    pub fn new(club: Club<MemoryStore>) -> Self {
        Self {
            club: Arc::new(tokio::sync::RwLock::new(club)),
        }
    }
}
