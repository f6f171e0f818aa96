use std::collections::BTreeSet;
use std::sync::Arc;

use async_trait::async_trait;
use log::{debug, info, warn};

use hiscores_api::{GameMode, HiscoresSource, PlayerPayload};

use super::{CategoryComparison, ReconcileError, ReconciliationServiceTrait};
use crate::taxonomies::{CategoryGroup, TaxonomyServiceTrait};

/// Set differences between the local "all" groups and one payload.
pub fn diff_categories(
    local_skills: &[String],
    local_activities: &[String],
    payload: &PlayerPayload,
) -> CategoryComparison {
    let local_skills: BTreeSet<&str> = local_skills.iter().map(String::as_str).collect();
    let local_activities: BTreeSet<&str> = local_activities.iter().map(String::as_str).collect();
    let api_skills: BTreeSet<&str> = payload.skill_names().collect();
    let api_activities: BTreeSet<&str> = payload.activity_names().collect();

    CategoryComparison {
        missing_skills: owned(api_skills.difference(&local_skills)),
        missing_activities: owned(api_activities.difference(&local_activities)),
        extra_skills: owned(local_skills.difference(&api_skills)),
        extra_activities: owned(local_activities.difference(&api_activities)),
    }
}

fn owned<'a, 'b: 'a>(names: impl Iterator<Item = &'a &'b str>) -> BTreeSet<String> {
    names.map(|name| (*name).to_owned()).collect()
}

/// Checks the taxonomy's exhaustive groups against what the hiscores return.
pub struct ReconciliationService {
    source: Arc<dyn HiscoresSource>,
    taxonomy: Arc<dyn TaxonomyServiceTrait + Send + Sync>,
}

impl ReconciliationService {
    pub fn new(
        source: Arc<dyn HiscoresSource>,
        taxonomy: Arc<dyn TaxonomyServiceTrait + Send + Sync>,
    ) -> Self {
        Self { source, taxonomy }
    }
}

#[async_trait]
impl ReconciliationServiceTrait for ReconciliationService {
    async fn compare(
        &self,
        username: &str,
    ) -> Result<Option<CategoryComparison>, ReconcileError> {
        debug!("Reconciling categories against player '{}'", username);

        let payload = self
            .source
            .fetch_player(username, GameMode::Regular)
            .await?
            .ok_or_else(|| ReconcileError::PlayerUnavailable {
                username: username.to_string(),
            })?;

        let groups = self
            .taxonomy
            .get(&[CategoryGroup::AllSkills, CategoryGroup::AllActivities])?
            .ok_or(ReconcileError::CategoriesUnavailable)?;

        let skills = groups
            .get(CategoryGroup::AllSkills.display_name())
            .ok_or(ReconcileError::CategoriesUnavailable)?;
        let activities = groups
            .get(CategoryGroup::AllActivities.display_name())
            .ok_or(ReconcileError::CategoriesUnavailable)?;

        let comparison = diff_categories(skills, activities, &payload);
        if comparison.is_empty() {
            info!("Local categories match the hiscores");
            return Ok(None);
        }

        warn!("Local categories differ from the hiscores: {}", comparison);
        Ok(Some(comparison))
    }
}
