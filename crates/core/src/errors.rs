//! Core error types for hiscores analysis.
//!
//! Each concern keeps its own error enum next to its code; this module ties
//! them together into the root [`Error`] returned by the pipeline.

use thiserror::Error;

use hiscores_api::HiscoresError;

use crate::normalize::NormalizeError;
use crate::reconcile::{CategoryComparison, ReconcileError};
use crate::taxonomies::TaxonomyError;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the analysis pipeline.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Category taxonomy error: {0}")]
    Taxonomy(#[from] TaxonomyError),

    #[error("Hiscores request failed: {0}")]
    Hiscores(#[from] HiscoresError),

    #[error("Category reconciliation failed: {0}")]
    Reconcile(#[from] ReconcileError),

    /// The local taxonomy no longer matches what the hiscores return.
    #[error("Local categories are out of date: {0}")]
    TaxonomyDrift(CategoryComparison),

    #[error("No player data could be fetched")]
    NoPlayerData,

    #[error("Normalization failed: {0}")]
    Normalize(#[from] NormalizeError),
}

/// Input-contract violations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required collection was empty.
    #[error("The list of {0} to validate cannot be empty")]
    EmptyInput(&'static str),

    /// Every supplied username failed validation.
    #[error("No valid usernames found: {}", .0.join(", "))]
    NoValidUsernames(Vec<String>),
}
