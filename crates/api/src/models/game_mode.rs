use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Account type; each one is ranked on its own hiscores table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GameMode {
    Regular,
    Ironman,
    Hardcore,
    Ultimate,
}

impl GameMode {
    pub const ALL: [GameMode; 4] = [
        GameMode::Regular,
        GameMode::Ironman,
        GameMode::Hardcore,
        GameMode::Ultimate,
    ];

    /// Lowercase tag used on the command line and in log messages.
    pub const fn as_str(&self) -> &'static str {
        match self {
            GameMode::Regular => "regular",
            GameMode::Ironman => "ironman",
            GameMode::Hardcore => "hardcore",
            GameMode::Ultimate => "ultimate",
        }
    }

    /// Path of this mode's `index_lite.json` endpoint, without host or query.
    pub const fn endpoint_path(&self) -> &'static str {
        match self {
            GameMode::Regular => "m=hiscore_oldschool/index_lite.json",
            GameMode::Ironman => "m=hiscore_oldschool_ironman/index_lite.json",
            GameMode::Hardcore => "m=hiscore_oldschool_hardcore_ironman/index_lite.json",
            GameMode::Ultimate => "m=hiscore_oldschool_ultimate/index_lite.json",
        }
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown game mode: '{0}' (expected regular, ironman, hardcore or ultimate)")]
pub struct UnknownGameMode(pub String);

impl FromStr for GameMode {
    type Err = UnknownGameMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        GameMode::ALL
            .into_iter()
            .find(|mode| needle.eq_ignore_ascii_case(mode.as_str()))
            .ok_or_else(|| UnknownGameMode(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_paths() {
        assert_eq!(
            GameMode::Regular.endpoint_path(),
            "m=hiscore_oldschool/index_lite.json"
        );
        assert_eq!(
            GameMode::Ironman.endpoint_path(),
            "m=hiscore_oldschool_ironman/index_lite.json"
        );
        assert_eq!(
            GameMode::Hardcore.endpoint_path(),
            "m=hiscore_oldschool_hardcore_ironman/index_lite.json"
        );
        assert_eq!(
            GameMode::Ultimate.endpoint_path(),
            "m=hiscore_oldschool_ultimate/index_lite.json"
        );
    }

    #[test]
    fn test_every_mode_has_a_distinct_endpoint() {
        let mut paths: Vec<_> = GameMode::ALL.iter().map(|m| m.endpoint_path()).collect();
        paths.sort_unstable();
        paths.dedup();
        assert_eq!(paths.len(), GameMode::ALL.len());
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("Hardcore".parse::<GameMode>().unwrap(), GameMode::Hardcore);
        assert_eq!("ULTIMATE".parse::<GameMode>().unwrap(), GameMode::Ultimate);
        assert_eq!(" ironman ".parse::<GameMode>().unwrap(), GameMode::Ironman);
    }

    #[test]
    fn test_parse_rejects_unknown_mode() {
        let err = "INVALID_MODE".parse::<GameMode>().unwrap_err();
        assert_eq!(err, UnknownGameMode("INVALID_MODE".to_string()));
    }

    #[test]
    fn test_serializes_as_uppercase_name() {
        let json = serde_json::to_string(&GameMode::Hardcore).unwrap();
        assert_eq!(json, "\"HARDCORE\"");
    }
}
