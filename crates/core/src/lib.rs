//! Hiscores Core - username validation, category taxonomy, reconciliation,
//! normalization, and the end-to-end pipeline.
//!
//! This crate holds the analysis logic. Raw player data comes from any
//! `hiscores_api::HiscoresSource`, so everything here can run against a fake.

pub mod constants;
pub mod errors;
pub mod normalize;
pub mod pipeline;
pub mod reconcile;
pub mod taxonomies;
pub mod usernames;

pub use normalize::{normalize_player, normalize_players, NormalizedBatch, NormalizedRecord};
pub use pipeline::{HiscoresPipeline, HiscoresPipelineTrait, PipelineReport, PipelineRequest};
pub use reconcile::{CategoryComparison, ReconciliationService, ReconciliationServiceTrait};
pub use taxonomies::{CategoryGroup, CategoryMap, TaxonomyServiceTrait, TaxonomyStore};
pub use usernames::{is_valid_username, validate_usernames, UsernamePartition};

// Re-export error types
pub use errors::Error;
pub use errors::Result;
