//! Scoring configuration

use serde::Deserialize;

use crate::domain::scoring::TomPolicy;

/// Scoring configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringConfig {
    /// Theory-of-mind level resolution policy (`threshold` or `best_ratio`)
    #[serde(default)]
    pub tom_policy: TomPolicy,
}
