use std::collections::BTreeSet;
use std::fmt;

use serde::Serialize;

/// Differences between the local "all" groups and a live payload.
///
/// `missing_*` are returned by the hiscores but absent locally; `extra_*`
/// are defined locally but were not returned.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CategoryComparison {
    pub missing_skills: BTreeSet<String>,
    pub missing_activities: BTreeSet<String>,
    pub extra_skills: BTreeSet<String>,
    pub extra_activities: BTreeSet<String>,
}

impl CategoryComparison {
    pub fn is_empty(&self) -> bool {
        self.missing_skills.is_empty()
            && self.missing_activities.is_empty()
            && self.extra_skills.is_empty()
            && self.extra_activities.is_empty()
    }

    fn sections(&self) -> [(&'static str, &BTreeSet<String>); 4] {
        [
            ("missing skills", &self.missing_skills),
            ("missing activities", &self.missing_activities),
            ("extra skills", &self.extra_skills),
            ("extra activities", &self.extra_activities),
        ]
    }
}

impl fmt::Display for CategoryComparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("no differences");
        }

        let mut first = true;
        for (label, names) in self.sections() {
            if names.is_empty() {
                continue;
            }
            if !first {
                f.write_str("; ")?;
            }
            first = false;
            let joined: Vec<&str> = names.iter().map(String::as_str).collect();
            write!(f, "{}: {}", label, joined.join(", "))?;
        }
        Ok(())
    }
}
