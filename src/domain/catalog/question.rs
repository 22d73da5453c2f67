//! Question and skill domain types.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Canonical item number of a catalog question (1-based, stable across versions).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionId(u32);

impl QuestionId {
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for QuestionId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u32>().map(Self)
    }
}

/// One of the six categories grouping related questionnaire items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillDomain {
    Comprehension,
    Communication,
    Regulation,
    Flexibility,
    SpecificSkills,
    Autonomy,
}

impl SkillDomain {
    /// All domains in display order.
    pub const ALL: [SkillDomain; 6] = [
        SkillDomain::Comprehension,
        SkillDomain::Communication,
        SkillDomain::Regulation,
        SkillDomain::Flexibility,
        SkillDomain::SpecificSkills,
        SkillDomain::Autonomy,
    ];

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            SkillDomain::Comprehension => "Social comprehension",
            SkillDomain::Communication => "Communication",
            SkillDomain::Regulation => "Emotional regulation",
            SkillDomain::Flexibility => "Flexibility",
            SkillDomain::SpecificSkills => "Specific social skills",
            SkillDomain::Autonomy => "Social autonomy",
        }
    }
}

impl fmt::Display for SkillDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One immutable questionnaire item.
///
/// `tom_level` is the theory-of-mind developmental stage (0-5) the item
/// probes; `label` and `help` are display text for the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Question {
    pub id: QuestionId,
    pub domain: SkillDomain,
    pub tom_level: u8,
    pub label: &'static str,
    pub help: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn question_id_parses_from_string() {
        assert_eq!("17".parse::<QuestionId>().unwrap(), QuestionId::new(17));
        assert!("abc".parse::<QuestionId>().is_err());
    }

    #[test]
    fn skill_domain_serializes_as_snake_case() {
        assert_eq!(
            serde_json::to_string(&SkillDomain::SpecificSkills).unwrap(),
            "\"specific_skills\""
        );
        let d: SkillDomain = serde_json::from_str("\"comprehension\"").unwrap();
        assert_eq!(d, SkillDomain::Comprehension);
    }

    #[test]
    fn all_lists_six_distinct_domains() {
        let domains: std::collections::HashSet<_> = SkillDomain::ALL.into_iter().collect();
        assert_eq!(domains.len(), 6);
    }

    #[test]
    fn labels_are_human_readable() {
        assert_eq!(SkillDomain::Regulation.label(), "Emotional regulation");
        assert_eq!(format!("{}", SkillDomain::Autonomy), "Social autonomy");
    }
}
