//! Domain models for the category taxonomy.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde_yaml::Value;
use thiserror::Error;

use super::TaxonomyError;

/// Group display name -> member metric names, as handed to the normalizer.
pub type CategoryMap = BTreeMap<String, Vec<String>>;

/// Category groups a caller can ask for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CategoryGroup {
    AllSkills,
    AllActivities,
    Combat,
    CombatIncludingSlayer,
    Gathering,
    Production,
    Utility,
    Pvp,
    TreasureTrails,
    Minigames,
    Bosses,
    Raids,
    Other,
}

impl CategoryGroup {
    pub const ALL: [CategoryGroup; 13] = [
        CategoryGroup::AllSkills,
        CategoryGroup::AllActivities,
        CategoryGroup::Combat,
        CategoryGroup::CombatIncludingSlayer,
        CategoryGroup::Gathering,
        CategoryGroup::Production,
        CategoryGroup::Utility,
        CategoryGroup::Pvp,
        CategoryGroup::TreasureTrails,
        CategoryGroup::Minigames,
        CategoryGroup::Bosses,
        CategoryGroup::Raids,
        CategoryGroup::Other,
    ];

    /// Key of this group in the taxonomy file.
    pub const fn display_name(&self) -> &'static str {
        match self {
            CategoryGroup::AllSkills => "All Skills",
            CategoryGroup::AllActivities => "All Activities",
            CategoryGroup::Combat => "Combat",
            CategoryGroup::CombatIncludingSlayer => "Combat Including Slayer",
            CategoryGroup::Gathering => "Gathering",
            CategoryGroup::Production => "Production",
            CategoryGroup::Utility => "Utility",
            CategoryGroup::Pvp => "PVP",
            CategoryGroup::TreasureTrails => "Treasure Trails",
            CategoryGroup::Minigames => "Minigames",
            CategoryGroup::Bosses => "Bosses",
            CategoryGroup::Raids => "Raids",
            CategoryGroup::Other => "Other",
        }
    }
}

impl fmt::Display for CategoryGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown category group: '{0}'")]
pub struct UnknownCategoryGroup(pub String);

/// Lowercase and treat `-`, `_` and runs of spaces alike.
fn normalize_group_name(name: &str) -> String {
    name.split(|c: char| c.is_whitespace() || c == '-' || c == '_')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

impl FromStr for CategoryGroup {
    type Err = UnknownCategoryGroup;

    /// Accepts `"Combat Including Slayer"`, `"combat-including-slayer"`, `"COMBAT_INCLUDING_SLAYER"`, ...
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize_group_name(s);
        CategoryGroup::ALL
            .into_iter()
            .find(|group| normalize_group_name(group.display_name()) == wanted)
            .ok_or_else(|| UnknownCategoryGroup(s.to_string()))
    }
}

/// A loaded taxonomy: every group has at least one member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Taxonomy {
    groups: BTreeMap<String, Vec<String>>,
}

impl Taxonomy {
    /// Parse a YAML mapping of group name -> list of member names.
    ///
    /// A single malformed or empty group rejects the whole document.
    pub fn from_yaml_str(text: &str) -> Result<Self, TaxonomyError> {
        if text.trim().is_empty() {
            return Err(TaxonomyError::Format("The category file is empty".to_string()));
        }

        let document: Value = serde_yaml::from_str(text)?;
        let Value::Mapping(mapping) = document else {
            return Err(TaxonomyError::Format(
                "The category file must contain a mapping of category names to lists".to_string(),
            ));
        };

        let mut groups = BTreeMap::new();
        let mut empty = Vec::new();

        for (key, value) in mapping {
            let name = match key {
                Value::String(name) => name,
                other => {
                    return Err(TaxonomyError::Format(format!(
                        "Category names must be strings, found {:?}",
                        other
                    )))
                }
            };

            let members = match value {
                Value::Null => Vec::new(),
                Value::Sequence(items) => items
                    .into_iter()
                    .map(|item| match item {
                        Value::String(member) => Ok(member),
                        other => Err(TaxonomyError::Format(format!(
                            "Category '{}' contains a non-string member: {:?}",
                            name, other
                        ))),
                    })
                    .collect::<Result<Vec<_>, _>>()?,
                other => {
                    return Err(TaxonomyError::Format(format!(
                        "Category '{}' must map to a list, found {:?}",
                        name, other
                    )))
                }
            };

            if members.is_empty() {
                empty.push(name);
            } else {
                groups.insert(name, members);
            }
        }

        if !empty.is_empty() {
            return Err(TaxonomyError::EmptyGroups(empty));
        }
        if groups.is_empty() {
            return Err(TaxonomyError::Format(
                "The category file does not define any categories".to_string(),
            ));
        }

        Ok(Self { groups })
    }

    /// Members of a group, looked up by exact (case-sensitive) display name.
    pub fn group(&self, name: &str) -> Option<&[String]> {
        self.groups.get(name).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "
All Skills:
  - Attack
  - Strength
  - Defence
All Activities:
  - Bounty Hunter
  - Clue Scrolls
Combat:
  - Attack
  - Strength
";

    #[test]
    fn test_from_yaml_keeps_member_order() {
        let taxonomy = Taxonomy::from_yaml_str(SAMPLE).unwrap();

        assert_eq!(taxonomy.len(), 3);
        assert_eq!(
            taxonomy.group("All Skills").unwrap(),
            ["Attack", "Strength", "Defence"]
        );
        assert_eq!(
            taxonomy.group("All Activities").unwrap(),
            ["Bounty Hunter", "Clue Scrolls"]
        );
    }

    #[test]
    fn test_group_lookup_is_case_sensitive() {
        let taxonomy = Taxonomy::from_yaml_str(SAMPLE).unwrap();
        assert!(taxonomy.group("all skills").is_none());
    }

    #[test]
    fn test_special_characters_survive() {
        let yaml = "
Special-Category!:
  - item with spaces
  - item_with_underscore
  - item-with-dash
";
        let taxonomy = Taxonomy::from_yaml_str(yaml).unwrap();
        let members = taxonomy.group("Special-Category!").unwrap();
        assert!(members.iter().any(|m| m == "item with spaces"));
    }

    #[test]
    fn test_empty_group_fails_whole_document() {
        let yaml = "
Category1:
  - item1
EmptyCategory:
Category2:
  - item2
";
        let err = Taxonomy::from_yaml_str(yaml).unwrap_err();
        assert!(err.is_format());
        assert_eq!(
            err.to_string(),
            "Invalid format: Empty categories found: EmptyCategory"
        );
    }

    #[test]
    fn test_empty_list_is_also_empty_group() {
        let err = Taxonomy::from_yaml_str("A: []\nB: [x]\nC: []\n").unwrap_err();
        match err {
            TaxonomyError::EmptyGroups(groups) => assert_eq!(groups, vec!["A", "C"]),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_scalar_document_is_format_error() {
        let err = Taxonomy::from_yaml_str("Not a valid YAML dictionary").unwrap_err();
        assert!(matches!(err, TaxonomyError::Format(_)));
    }

    #[test]
    fn test_empty_document_is_format_error() {
        let err = Taxonomy::from_yaml_str("").unwrap_err();
        assert!(matches!(err, TaxonomyError::Format(_)));
    }

    #[test]
    fn test_non_list_group_is_format_error() {
        let err = Taxonomy::from_yaml_str("Combat: Attack\n").unwrap_err();
        assert!(matches!(err, TaxonomyError::Format(_)));
    }

    #[test]
    fn test_non_string_member_is_format_error() {
        let err = Taxonomy::from_yaml_str("Combat:\n  - Attack\n  - 99\n").unwrap_err();
        assert!(matches!(err, TaxonomyError::Format(_)));
    }

    #[test]
    fn test_broken_yaml_is_parse_error() {
        let yaml = "Combat: [Attack, Strength\n";
        let err = Taxonomy::from_yaml_str(yaml).unwrap_err();
        assert!(matches!(err, TaxonomyError::Parse(_)));
    }

    #[test]
    fn test_category_group_display_names() {
        assert_eq!(CategoryGroup::AllSkills.display_name(), "All Skills");
        assert_eq!(CategoryGroup::Pvp.display_name(), "PVP");
        assert_eq!(
            CategoryGroup::CombatIncludingSlayer.to_string(),
            "Combat Including Slayer"
        );
    }

    #[test]
    fn test_category_group_parses_loose_spellings() {
        assert_eq!(
            "combat-including-slayer".parse::<CategoryGroup>().unwrap(),
            CategoryGroup::CombatIncludingSlayer
        );
        assert_eq!(
            "TREASURE_TRAILS".parse::<CategoryGroup>().unwrap(),
            CategoryGroup::TreasureTrails
        );
        assert_eq!("pvp".parse::<CategoryGroup>().unwrap(), CategoryGroup::Pvp);
        assert_eq!(
            "All Activities".parse::<CategoryGroup>().unwrap(),
            CategoryGroup::AllActivities
        );
        assert!("Skilling".parse::<CategoryGroup>().is_err());
    }

    #[test]
    fn test_display_names_are_distinct() {
        let mut names: Vec<_> = CategoryGroup::ALL.iter().map(|g| g.display_name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), CategoryGroup::ALL.len());
    }

    #[test]
    fn test_every_group_round_trips_through_its_display_name() {
        for group in CategoryGroup::ALL {
            assert_eq!(group.display_name().parse::<CategoryGroup>().unwrap(), group);
        }
    }
}
