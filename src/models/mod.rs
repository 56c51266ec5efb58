//! Core data models for the squad manager.

mod availability;
mod ids;
mod matches;
mod player;
mod rating;

pub use availability::*;
pub use ids::*;
pub use matches::*;
pub use player::*;
pub use rating::*;
