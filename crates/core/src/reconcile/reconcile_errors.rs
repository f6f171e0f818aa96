use thiserror::Error;

use hiscores_api::HiscoresError;

use crate::taxonomies::TaxonomyError;

/// Reasons a reconciliation could not produce a comparison.
#[derive(Error, Debug)]
pub enum ReconcileError {
    /// The sample player has no regular-mode entry.
    #[error("Unable to fetch API data for comparison: player '{username}' not found")]
    PlayerUnavailable { username: String },

    #[error("Unable to fetch API data for comparison: {0}")]
    Fetch(#[from] HiscoresError),

    /// The taxonomy loaded but lacks one of the "all" groups.
    #[error("Unable to load local categories for comparison")]
    CategoriesUnavailable,

    #[error("Unable to load local categories for comparison: {0}")]
    Taxonomy(#[from] TaxonomyError),
}
