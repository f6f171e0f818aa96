use std::collections::{BTreeMap, HashMap};

use log::{debug, error, info, warn};

use hiscores_api::{ActivityEntry, PlayerPayload, SkillEntry};

use super::{MetricRecord, NormalizeError, NormalizedBatch, NormalizedRecord, GAME_MODE_KEY};
use crate::taxonomies::CategoryMap;

/// Build one player's record from the members of every requested group.
///
/// A member is looked up among skills first, then activities. If any member
/// is found in neither, no record is produced.
pub fn normalize_player(
    payload: &PlayerPayload,
    categories: &CategoryMap,
) -> Result<NormalizedRecord, NormalizeError> {
    if categories.values().all(Vec::is_empty) {
        error!("No categories to process");
        return Err(NormalizeError::EmptyCategories);
    }

    if categories
        .values()
        .flatten()
        .any(|member| member == GAME_MODE_KEY)
    {
        let err = NormalizeError::ReservedMetricName(GAME_MODE_KEY.to_string());
        error!("{}", err);
        return Err(err);
    }

    let member_count: usize = categories.values().map(Vec::len).sum();
    debug!("Starting to process data for {} categories", member_count);

    let skills: HashMap<&str, &SkillEntry> = payload
        .skills
        .iter()
        .map(|s| (s.name.as_str(), s))
        .collect();
    let activities: HashMap<&str, &ActivityEntry> = payload
        .activities
        .iter()
        .map(|a| (a.name.as_str(), a))
        .collect();

    let mut metrics: BTreeMap<String, MetricRecord> = BTreeMap::new();
    let mut missing: Vec<String> = Vec::new();

    for member in categories.values().flatten() {
        if metrics.contains_key(member) {
            continue;
        }
        if let Some(skill) = skills.get(member.as_str()) {
            metrics.insert(member.clone(), MetricRecord::Skill((*skill).into()));
        } else if let Some(activity) = activities.get(member.as_str()) {
            metrics.insert(member.clone(), MetricRecord::Activity((*activity).into()));
        } else if !missing.contains(member) {
            missing.push(member.clone());
        }
    }

    if !missing.is_empty() {
        let err = NormalizeError::MissingMetrics { names: missing };
        error!("{}", err);
        return Err(err);
    }

    debug!("Processed data for {} categories", metrics.len());
    Ok(NormalizedRecord {
        game_mode: payload.game_mode,
        metrics,
    })
}

/// Normalize every player, collecting the ones that fail.
///
/// `None` payloads (players that could not be fetched) count as failures.
/// Fails only when there is nothing to do or nobody succeeds.
pub fn normalize_players(
    payloads: &BTreeMap<String, Option<PlayerPayload>>,
    categories: &CategoryMap,
) -> Result<NormalizedBatch, NormalizeError> {
    if payloads.is_empty() {
        error!("No player data to process");
        return Err(NormalizeError::NoPlayers);
    }
    if categories.values().all(Vec::is_empty) {
        error!("No categories to process");
        return Err(NormalizeError::EmptyCategories);
    }

    info!("Processing data for {} players", payloads.len());

    let mut batch = NormalizedBatch::default();
    for (username, payload) in payloads {
        let Some(payload) = payload else {
            warn!("No data for player '{}'", username);
            batch.failed.push(username.clone());
            continue;
        };

        match normalize_player(payload, categories) {
            Ok(record) => {
                batch.records.insert(username.clone(), record);
            }
            Err(e) => {
                warn!("Failed to process data for player '{}': {}", username, e);
                batch.failed.push(username.clone());
            }
        }
    }

    if batch.records.is_empty() {
        error!("Failed to process data for all players");
        return Err(NormalizeError::AllPlayersFailed {
            failed: batch.failed,
        });
    }

    info!(
        "Processed {} players, {} failed",
        batch.records.len(),
        batch.failed.len()
    );
    Ok(batch)
}
