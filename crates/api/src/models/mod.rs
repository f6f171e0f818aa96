//! Hiscores data models
//!
//! - `game_mode` - The closed set of account types and their endpoints
//! - `player` - Raw skill/activity records and the per-player payload

mod game_mode;
mod player;

pub use game_mode::{GameMode, UnknownGameMode};
pub(crate) use player::HiscoresResponse;
pub use player::{ActivityEntry, PlayerPayload, SkillEntry};
