//! The persisted outcome of one questionnaire submission.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::catalog::SkillDomain;
use crate::domain::foundation::{RetrievalCode, Timestamp};
use crate::domain::scoring::{AnswerSheet, ScoreSummary};

/// Complete record of one submission, keyed in the store by `code`.
///
/// Created once, immutable thereafter; the store owns it after `put`. Field
/// names follow the persisted-document convention; `responses` and `total`
/// are accepted as legacy spellings on load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultRecord {
    pub code: RetrievalCode,
    #[serde(alias = "responses")]
    pub answers: AnswerSheet,
    pub domain_scores: BTreeMap<SkillDomain, u32>,
    pub domain_max: BTreeMap<SkillDomain, u32>,
    #[serde(alias = "total")]
    pub total_score: u32,
    pub total_max: u32,
    pub tom_level: u8,
    pub timestamp: Timestamp,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age_group: Option<String>,
}

impl ResultRecord {
    /// Assembles a record from a freshly computed summary, stamped now.
    pub fn new(
        code: RetrievalCode,
        answers: AnswerSheet,
        summary: ScoreSummary,
        age_group: Option<String>,
    ) -> Self {
        Self {
            code,
            answers,
            domain_scores: summary.domain_scores,
            domain_max: summary.domain_max,
            total_score: summary.total_score,
            total_max: summary.total_max,
            tom_level: summary.tom_level,
            timestamp: Timestamp::now(),
            age_group,
        }
    }
}
