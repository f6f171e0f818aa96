use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use hiscores_api::{ActivityEntry, GameMode, SkillEntry};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillStats {
    pub rank: i64,
    pub level: i64,
    pub xp: i64,
}

impl From<&SkillEntry> for SkillStats {
    fn from(entry: &SkillEntry) -> Self {
        Self {
            rank: entry.rank,
            level: entry.level,
            xp: entry.xp,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityStats {
    pub rank: i64,
    pub score: i64,
}

impl From<&ActivityEntry> for ActivityStats {
    fn from(entry: &ActivityEntry) -> Self {
        Self {
            rank: entry.rank,
            score: entry.score,
        }
    }
}

/// One metric in a normalized record, shaped by its kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetricRecord {
    Skill(SkillStats),
    Activity(ActivityStats),
}

/// Key of the game mode tag in a serialized record; no metric may use it.
pub const GAME_MODE_KEY: &str = "game_mode";

/// A player's requested metrics keyed by metric name.
///
/// Serializes flat: `{"game_mode": "REGULAR", "Attack": {...}, ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NormalizedRecord {
    pub game_mode: GameMode,
    #[serde(flatten)]
    pub metrics: BTreeMap<String, MetricRecord>,
}

impl NormalizedRecord {
    pub fn metric(&self, name: &str) -> Option<&MetricRecord> {
        self.metrics.get(name)
    }
}

/// Result of normalizing several players; at least one record is present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NormalizedBatch {
    pub records: BTreeMap<String, NormalizedRecord>,
    pub failed: Vec<String>,
}
