use serde::{Deserialize, Serialize};

use super::game_mode::GameMode;

/// A leveled skill as returned by `index_lite.json`.
///
/// Unranked values come back as `-1`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u32>,
    pub name: String,
    pub rank: i64,
    pub level: i64,
    pub xp: i64,
}

/// A scored activity (boss, minigame, clue tier, ...) as returned by `index_lite.json`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u32>,
    pub name: String,
    pub rank: i64,
    pub score: i64,
}

/// Raw hiscores data for one player under one game mode.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerPayload {
    pub game_mode: GameMode,
    pub skills: Vec<SkillEntry>,
    pub activities: Vec<ActivityEntry>,
}

impl PlayerPayload {
    pub fn new(game_mode: GameMode, skills: Vec<SkillEntry>, activities: Vec<ActivityEntry>) -> Self {
        Self {
            game_mode,
            skills,
            activities,
        }
    }

    pub fn skill_names(&self) -> impl Iterator<Item = &str> {
        self.skills.iter().map(|s| s.name.as_str())
    }

    pub fn activity_names(&self) -> impl Iterator<Item = &str> {
        self.activities.iter().map(|a| a.name.as_str())
    }
}

/// Body of a successful `index_lite.json` response.
///
/// Both lists are required; a body missing either one is malformed.
#[derive(Debug, Deserialize)]
pub(crate) struct HiscoresResponse {
    pub skills: Vec<SkillEntry>,
    pub activities: Vec<ActivityEntry>,
}

impl HiscoresResponse {
    pub(crate) fn into_payload(self, game_mode: GameMode) -> PlayerPayload {
        PlayerPayload::new(game_mode, self.skills, self.activities)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_decodes_with_and_without_ids() {
        let body = r#"{
            "skills": [
                {"id": 0, "name": "Overall", "rank": 1, "level": 2277, "xp": 4600000000},
                {"name": "Attack", "rank": 15, "level": 99, "xp": 200000000}
            ],
            "activities": [
                {"id": 0, "name": "League Points", "rank": -1, "score": -1}
            ]
        }"#;

        let response: HiscoresResponse = serde_json::from_str(body).unwrap();
        let payload = response.into_payload(GameMode::Regular);

        assert_eq!(payload.game_mode, GameMode::Regular);
        assert_eq!(payload.skills[0].id, Some(0));
        assert_eq!(payload.skills[1].id, None);
        assert_eq!(payload.skills[1].xp, 200_000_000);
        assert_eq!(payload.activities[0].rank, -1);
        assert_eq!(
            payload.skill_names().collect::<Vec<_>>(),
            vec!["Overall", "Attack"]
        );
        assert_eq!(
            payload.activity_names().collect::<Vec<_>>(),
            vec!["League Points"]
        );
    }

    #[test]
    fn test_response_requires_both_lists() {
        let err = serde_json::from_str::<HiscoresResponse>(r#"{"skills": []}"#).unwrap_err();
        assert!(err.to_string().contains("activities"));
    }
}
