//! # Pitchside
//!
//! A small club-management service for grassroots football: match
//! scheduling, availability tracking, peer ratings, and automatic team
//! balancing.
//!
//! ## Architecture
//!
//! - **models**: Core data structures (players, matches, availability, ratings)
//! - **club**: The service layer and its storage abstraction
//! - **calculate**: Pure team-partitioning and rating arithmetic
//! - **storage**: JSONL snapshots of club state
//! - **api**: REST API endpoints
//! - **config**: Configuration loading and validation
//! - **seed**: Demo dataset for local development

pub mod api;
pub mod calculate;
pub mod club;
pub mod config;
pub mod models;
pub mod seed;
pub mod storage;

pub use models::*;
