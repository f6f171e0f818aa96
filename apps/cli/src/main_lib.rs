use std::sync::Arc;

use anyhow::Context;
use serde::Serialize;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use hiscores_api::{ClientConfig, GameMode, HiscoresClient, HiscoresSource, ProbeOptions};
use hiscores_core::{
    validate_usernames, CategoryComparison, CategoryGroup, CategoryMap, HiscoresPipeline,
    HiscoresPipelineTrait, PipelineReport, PipelineRequest, ReconciliationService,
    ReconciliationServiceTrait, TaxonomyServiceTrait, TaxonomyStore, UsernamePartition,
};

use crate::config::Config;

/// Logs go to stderr so stdout stays clean JSON.
pub fn init_tracing(log_format: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_current_span(false)
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_line_number(true)
                    .with_writer(std::io::stderr),
            )
            .init();
    }
}

pub struct AppState {
    pub source: Arc<dyn HiscoresSource>,
    pub taxonomy: Arc<dyn TaxonomyServiceTrait + Send + Sync>,
}

pub fn build_state(config: &Config) -> AppState {
    let client = HiscoresClient::with_config(ClientConfig {
        base_url: config.base_url.clone(),
        timeout: config.timeout,
        ..ClientConfig::default()
    });
    tracing::info!(
        "Hiscores host: {} (timeout {}s)",
        config.base_url,
        config.timeout.as_secs()
    );

    let taxonomy = match &config.taxonomy_path {
        Some(path) => {
            tracing::info!("Category file in use: {}", path.display());
            TaxonomyStore::from_path(path)
        }
        None => TaxonomyStore::embedded(),
    };

    AppState {
        source: Arc::new(client),
        taxonomy: Arc::new(taxonomy),
    }
}

pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let rendered = serde_json::to_string_pretty(value).context("Failed to render output")?;
    println!("{}", rendered);
    Ok(())
}

pub async fn run_pipeline(
    state: &AppState,
    request: PipelineRequest,
) -> anyhow::Result<PipelineReport> {
    let pipeline = HiscoresPipeline::new(state.source.clone(), state.taxonomy.clone());
    let report = pipeline.run(&request).await?;

    if !report.invalid_usernames.is_empty() {
        tracing::warn!("Invalid usernames skipped: {:?}", report.invalid_usernames);
    }
    if !report.failed_players.is_empty() {
        tracing::warn!("Unprocessed players: {:?}", report.failed_players);
    }
    Ok(report)
}

pub fn validate(usernames: &[String]) -> anyhow::Result<UsernamePartition> {
    Ok(validate_usernames(usernames)?)
}

#[derive(Serialize)]
pub struct ReconcileReport {
    pub username: String,
    pub in_sync: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub differences: Option<CategoryComparison>,
}

pub async fn reconcile(state: &AppState, username: &str) -> anyhow::Result<ReconcileReport> {
    let service = ReconciliationService::new(state.source.clone(), state.taxonomy.clone());
    let differences = service
        .compare(username)
        .await
        .context("Error checking missing categories")?;

    Ok(ReconcileReport {
        username: username.to_string(),
        in_sync: differences.is_none(),
        differences,
    })
}

#[derive(Serialize)]
pub struct ModeReport {
    pub username: String,
    pub game_mode: Option<GameMode>,
}

pub async fn detect_mode(
    state: &AppState,
    username: &str,
    options: ProbeOptions,
) -> anyhow::Result<ModeReport> {
    let game_mode = state.source.determine_mode(username, options).await;
    if game_mode.is_none() {
        tracing::warn!("No game mode found for '{}'", username);
    }

    Ok(ModeReport {
        username: username.to_string(),
        game_mode,
    })
}

/// Resolve the requested groups, or every group when none are given.
pub fn categories(state: &AppState, groups: &[CategoryGroup]) -> anyhow::Result<CategoryMap> {
    let groups = if groups.is_empty() {
        &CategoryGroup::ALL[..]
    } else {
        groups
    };
    Ok(state.taxonomy.require(groups)?)
}
