//! End-to-end run: validate, reconcile, resolve categories, fetch, normalize.

mod pipeline_model;
mod pipeline_service;
mod pipeline_traits;

pub use pipeline_model::{PipelineReport, PipelineRequest};
pub use pipeline_service::HiscoresPipeline;
pub use pipeline_traits::HiscoresPipelineTrait;
