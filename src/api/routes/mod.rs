//! Route handlers.

pub mod auth;
pub mod availability;
pub mod balance;
pub mod matches;
pub mod players;
pub mod ratings;
