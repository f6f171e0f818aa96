use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use log::{error, info, warn};

use hiscores_api::{HiscoresSource, PlayerPayload};

use super::{HiscoresPipelineTrait, PipelineReport, PipelineRequest};
use crate::errors::{Error, Result, ValidationError};
use crate::normalize::normalize_players;
use crate::reconcile::{ReconciliationService, ReconciliationServiceTrait};
use crate::taxonomies::TaxonomyServiceTrait;
use crate::usernames::validate_usernames;

/// Runs every stage in order; the first failing stage ends the run.
pub struct HiscoresPipeline {
    source: Arc<dyn HiscoresSource>,
    taxonomy: Arc<dyn TaxonomyServiceTrait + Send + Sync>,
    reconciler: Arc<dyn ReconciliationServiceTrait + Send + Sync>,
}

impl HiscoresPipeline {
    pub fn new(
        source: Arc<dyn HiscoresSource>,
        taxonomy: Arc<dyn TaxonomyServiceTrait + Send + Sync>,
    ) -> Self {
        let reconciler = Arc::new(ReconciliationService::new(source.clone(), taxonomy.clone()));
        Self::with_reconciler(source, taxonomy, reconciler)
    }

    pub fn with_reconciler(
        source: Arc<dyn HiscoresSource>,
        taxonomy: Arc<dyn TaxonomyServiceTrait + Send + Sync>,
        reconciler: Arc<dyn ReconciliationServiceTrait + Send + Sync>,
    ) -> Self {
        Self {
            source,
            taxonomy,
            reconciler,
        }
    }
}

#[async_trait]
impl HiscoresPipelineTrait for HiscoresPipeline {
    async fn run(&self, request: &PipelineRequest) -> Result<PipelineReport> {
        // validate
        let partition = validate_usernames(request.usernames.as_slice())?;
        if partition.valid.is_empty() {
            error!("No valid usernames found");
            return Err(ValidationError::NoValidUsernames(partition.invalid).into());
        }

        // reconcile
        let drift = self.reconciler.compare(&partition.valid[0]).await?;
        if let Some(comparison) = &drift {
            if !request.allow_drift {
                error!("Found discrepancies in local categories: {}", comparison);
                return Err(Error::TaxonomyDrift(comparison.clone()));
            }
            warn!("Continuing despite category discrepancies: {}", comparison);
        }

        // categories
        let categories = self.taxonomy.require(&request.groups)?;

        // fetch
        let fetched = self
            .source
            .fetch_many(&partition.valid, request.mode)
            .await;
        if fetched.is_empty() {
            error!("Failed to fetch player data from the hiscores");
            return Err(Error::NoPlayerData);
        }
        let unfetched_players: Vec<String> = partition
            .valid
            .iter()
            .filter(|username| !fetched.contains_key(username.as_str()))
            .cloned()
            .collect();

        // normalize
        let payloads: BTreeMap<String, Option<PlayerPayload>> = fetched
            .into_iter()
            .map(|(username, payload)| (username, Some(payload)))
            .collect();
        let batch = normalize_players(&payloads, &categories)?;

        info!(
            "Pipeline finished: {} players processed, {} failed, {} not fetched",
            batch.records.len(),
            batch.failed.len(),
            unfetched_players.len()
        );

        Ok(PipelineReport {
            game_mode: request.mode,
            players: batch.records,
            failed_players: batch.failed,
            invalid_usernames: partition.invalid,
            unfetched_players,
            drift,
        })
    }
}
