use std::collections::BTreeMap;

use serde::Serialize;

use hiscores_api::GameMode;

use crate::normalize::NormalizedRecord;
use crate::reconcile::CategoryComparison;
use crate::taxonomies::CategoryGroup;

/// What to fetch and how to report it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineRequest {
    pub usernames: Vec<String>,
    pub groups: Vec<CategoryGroup>,
    pub mode: GameMode,
    /// Continue (with a warning) when the taxonomy has drifted from the hiscores.
    pub allow_drift: bool,
}

impl PipelineRequest {
    pub fn new(usernames: Vec<String>, groups: Vec<CategoryGroup>) -> Self {
        Self {
            usernames,
            groups,
            mode: GameMode::Regular,
            allow_drift: false,
        }
    }

    pub fn with_mode(mut self, mode: GameMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn allow_drift(mut self, allow: bool) -> Self {
        self.allow_drift = allow;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PipelineReport {
    pub game_mode: GameMode,
    pub players: BTreeMap<String, NormalizedRecord>,
    /// Fetched but could not be normalized.
    pub failed_players: Vec<String>,
    pub invalid_usernames: Vec<String>,
    /// Valid usernames the hiscores did not return.
    pub unfetched_players: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub drift: Option<CategoryComparison>,
}
