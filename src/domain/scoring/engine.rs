//! Score aggregation.
//!
//! `compute_scores` is a pure function over a normalized [`AnswerSheet`]: no
//! I/O, no hidden state, deterministic for a given (answers, policy) pair.
//! Domain maxima come from the catalog, not from which questions were
//! answered, so `domain_max` and `total_max` are invariant across inputs.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::catalog::{QuestionCatalog, SkillDomain};
use crate::domain::foundation::AnswerValue;
use crate::domain::scoring::AnswerSheet;

const TOM_LEVEL_COUNT: usize = 6;

/// How the single theory-of-mind level is resolved from per-level ratios.
///
/// Both policies exist in observed scoring history and disagree on borderline
/// profiles, so the choice is explicit and configurable. Comparisons use
/// integer arithmetic only: `score/max >= 3/5` is tested as `score*5 >= max*3`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TomPolicy {
    /// The highest level whose ratio clears 0.6, scanning levels 0 to 5;
    /// 0 when no level clears the bar.
    #[default]
    Threshold,
    /// The level with the strictly greatest ratio among levels with answered
    /// items, ties broken by the lowest level index; 0 when nothing was
    /// answered.
    BestRatio,
}

/// Aggregated outcome of one questionnaire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreSummary {
    pub domain_scores: BTreeMap<SkillDomain, u32>,
    pub domain_max: BTreeMap<SkillDomain, u32>,
    pub total_score: u32,
    pub total_max: u32,
    pub tom_level: u8,
}

/// Aggregates a sheet into domain sub-scores, a grand total and a ToM level.
///
/// Unanswered questions count as 0 toward domain and total scores but are
/// excluded from the ToM ratios: a level none of whose tagged questions were
/// answered has an undefined ratio and is skipped, not treated as zero.
pub fn compute_scores(answers: &AnswerSheet, policy: TomPolicy) -> ScoreSummary {
    let catalog = QuestionCatalog::global();

    let mut domain_scores: BTreeMap<SkillDomain, u32> =
        SkillDomain::ALL.iter().map(|d| (*d, 0)).collect();
    let mut tom_scores = [0u32; TOM_LEVEL_COUNT];
    let mut tom_max = [0u32; TOM_LEVEL_COUNT];

    for question in catalog.all() {
        let answered = answers.get(question.id);
        let value = answered.map(|a| a.value()).unwrap_or(0);
        *domain_scores
            .entry(question.domain)
            .or_insert(0) += value;
        if answered.is_some() {
            let level = question.tom_level as usize;
            tom_scores[level] += value;
            tom_max[level] += AnswerValue::MAX;
        }
    }

    let total_score = domain_scores.values().sum();
    let tom_level = resolve_tom_level(&tom_scores, &tom_max, policy);

    ScoreSummary {
        domain_scores,
        domain_max: catalog.domain_max().clone(),
        total_score,
        total_max: catalog.total_max(),
        tom_level,
    }
}

fn resolve_tom_level(
    scores: &[u32; TOM_LEVEL_COUNT],
    max: &[u32; TOM_LEVEL_COUNT],
    policy: TomPolicy,
) -> u8 {
    match policy {
        TomPolicy::Threshold => {
            let mut resolved = 0u8;
            for level in 0..TOM_LEVEL_COUNT {
                if max[level] > 0 && scores[level] * 5 >= max[level] * 3 {
                    resolved = level as u8;
                }
            }
            resolved
        }
        TomPolicy::BestRatio => {
            let mut best: Option<(usize, u32, u32)> = None;
            for level in 0..TOM_LEVEL_COUNT {
                if max[level] == 0 {
                    continue;
                }
                match best {
                    // Strict inequality keeps the lowest level on ties.
                    Some((_, best_score, best_max))
                        if u64::from(scores[level]) * u64::from(best_max)
                            > u64::from(best_score) * u64::from(max[level]) =>
                    {
                        best = Some((level, scores[level], max[level]));
                    }
                    None => best = Some((level, scores[level], max[level])),
                    _ => {}
                }
            }
            best.map(|(level, _, _)| level as u8).unwrap_or(0)
        }
    }
}
