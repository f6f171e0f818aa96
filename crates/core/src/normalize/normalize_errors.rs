use thiserror::Error;

/// Why a player (or a batch of players) could not be normalized.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NormalizeError {
    #[error("No categories to process")]
    EmptyCategories,

    /// Requested metrics the payload does not contain.
    #[error("Categories not found in API data: {}", .names.join(", "))]
    MissingMetrics { names: Vec<String> },

    /// A requested metric would collide with the record's own fields.
    #[error("Category member '{0}' clashes with a record field")]
    ReservedMetricName(String),

    #[error("No player data to process")]
    NoPlayers,

    #[error("Failed to process data for every player: {}", .failed.join(", "))]
    AllPlayersFailed { failed: Vec<String> },
}
