use async_trait::async_trait;

use super::{CategoryComparison, ReconcileError};

/// Service trait for checking the local taxonomy against live data.
#[async_trait]
pub trait ReconciliationServiceTrait: Send + Sync {
    /// Compare the local "All Skills" and "All Activities" groups with the
    /// regular-mode payload of `username`.
    ///
    /// Returns `Ok(None)` when both sides name exactly the same metrics.
    async fn compare(&self, username: &str)
        -> Result<Option<CategoryComparison>, ReconcileError>;
}
