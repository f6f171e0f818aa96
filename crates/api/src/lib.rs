//! Hiscores API Crate
//!
//! This crate fetches raw player statistics from the Old School RuneScape
//! hiscores JSON endpoints.
//!
//! # Overview
//!
//! - One endpoint per [`GameMode`] (regular, ironman, hardcore, ultimate)
//! - A single-player fetch that separates "not found" from real failures
//! - A sequential batch fetch that drops players it could not fetch
//! - Game mode detection by probing endpoints in priority order
//!
//! # Architecture
//!
//! ```text
//! +------------------+     +------------------+
//! |  HiscoresSource  | --> |  HiscoresClient  |  (reqwest, 10s timeout)
//! +------------------+     +------------------+
//!   fetch_many                     |
//!   determine_mode                 v
//!                          +------------------+
//!                          |  PlayerPayload   |  (skills + activities)
//!                          +------------------+
//! ```
//!
//! # Outcomes
//!
//! [`HiscoresSource::fetch_player`] returns `Result<Option<PlayerPayload>, HiscoresError>`:
//! - `Ok(Some(_))` - the player exists under that game mode
//! - `Ok(None)` - the endpoint answered 404 (no such player in that mode)
//! - `Err(_)` - transport or format failure, classified by [`FailureKind`]

pub mod client;
pub mod errors;
pub mod models;

pub use client::{
    probe_order, ClientConfig, HiscoresClient, HiscoresSource, ProbeOptions, DEFAULT_BASE_URL,
    DEFAULT_TIMEOUT,
};
pub use errors::{FailureKind, HiscoresError};
pub use models::{ActivityEntry, GameMode, PlayerPayload, SkillEntry, UnknownGameMode};
