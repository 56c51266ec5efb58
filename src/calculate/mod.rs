//! Balancing and rating arithmetic.
//!
//! Pure functions with no store access:
//! - Greedy two-team partition by descending rating
//! - Rating mean and one-decimal rounding

use crate::models::PlayerId;

/// Outcome of a balancing run.
#[derive(Debug, Clone, PartialEq)]
pub struct Partition {
    pub team_a: Vec<PlayerId>,
    pub team_b: Vec<PlayerId>,
    pub sum_a: f64,
    pub sum_b: f64,
}

impl Partition {
    /// Absolute rating-sum gap between the two teams.
    pub fn gap(&self) -> f64 {
        (self.sum_a - self.sum_b).abs()
    }
}

/// Partition players into two teams with near-equal rating sums.
///
/// Greedy heuristic: stable-sort by rating descending, then assign each
/// player to the team with the lower running sum, team A on an exact tie.
/// Deterministic for a fixed input order; not guaranteed optimal (the
/// optimal partition is NP-hard), but the sums never differ by more than
/// the smallest assigned rating.
pub fn partition_by_rating(players: &[(PlayerId, f64)]) -> Partition {
    let mut sorted: Vec<(PlayerId, f64)> = players.to_vec();
    // Stable sort keeps the original relative order of equal ratings
    sorted.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

    let mut partition = Partition {
        team_a: Vec::new(),
        team_b: Vec::new(),
        sum_a: 0.0,
        sum_b: 0.0,
    };

    for (id, rating) in sorted {
        if partition.sum_a <= partition.sum_b {
            partition.team_a.push(id);
            partition.sum_a += rating;
        } else {
            partition.team_b.push(id);
            partition.sum_b += rating;
        }
    }

    partition
}

/// Mean of all submitted scores, or `None` when there are none.
pub fn mean(scores: &[f64]) -> Option<f64> {
    if scores.is_empty() {
        return None;
    }
    Some(scores.iter().sum::<f64>() / scores.len() as f64)
}

/// Round a rating to one decimal place, halves rounding up.
pub fn round_rating(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
