//! Reshapes raw player payloads into per-category records.

mod normalize_errors;
mod normalize_model;
mod normalize_service;

pub use normalize_errors::NormalizeError;
pub use normalize_model::{
    ActivityStats, MetricRecord, NormalizedBatch, NormalizedRecord, SkillStats, GAME_MODE_KEY,
};
pub use normalize_service::{normalize_player, normalize_players};
