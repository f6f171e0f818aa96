use async_trait::async_trait;

use super::{PipelineReport, PipelineRequest};
use crate::errors::Result;

/// Service trait for the end-to-end hiscores run.
#[async_trait]
pub trait HiscoresPipelineTrait: Send + Sync {
    async fn run(&self, request: &PipelineRequest) -> Result<PipelineReport>;
}
