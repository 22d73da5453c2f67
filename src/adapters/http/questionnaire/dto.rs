//! HTTP DTOs for questionnaire endpoints.
//!
//! These types decouple the HTTP API from domain types, allowing independent evolution.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::catalog::{Question, SkillDomain};
use crate::domain::scoring::ResultRecord;

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Request carrying a completed questionnaire.
///
/// Answers arrive as a loose `question id -> value` map; normalization
/// (dropping unknown ids and out-of-range values) happens in the domain.
#[derive(Debug, Clone, Deserialize)]
pub struct SubmitQuestionnaireRequest {
    pub answers: BTreeMap<String, serde_json::Value>,
    #[serde(default)]
    pub age_group: Option<String>,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// A single catalog question, for rendering the form.
#[derive(Debug, Clone, Serialize)]
pub struct QuestionResponse {
    pub id: u32,
    pub domain: SkillDomain,
    pub domain_label: &'static str,
    pub tom_level: u8,
    pub label: &'static str,
    pub help: &'static str,
}

impl From<&Question> for QuestionResponse {
    fn from(q: &Question) -> Self {
        Self {
            id: q.id.value(),
            domain: q.domain,
            domain_label: q.domain.label(),
            tom_level: q.tom_level,
            label: q.label,
            help: q.help,
        }
    }
}

/// Response for a stored submission.
#[derive(Debug, Clone, Serialize)]
pub struct SubmissionResponse {
    pub code: String,
    pub domain_scores: BTreeMap<SkillDomain, u32>,
    pub domain_max: BTreeMap<SkillDomain, u32>,
    pub total_score: u32,
    pub total_max: u32,
    pub tom_level: u8,
    pub notification_delivered: bool,
}

/// Full stored result, for practitioner lookup.
#[derive(Debug, Clone, Serialize)]
pub struct ResultResponse {
    pub code: String,
    pub answers: BTreeMap<String, u32>,
    pub domain_scores: BTreeMap<SkillDomain, u32>,
    pub domain_max: BTreeMap<SkillDomain, u32>,
    pub total_score: u32,
    pub total_max: u32,
    pub tom_level: u8,
    pub timestamp: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age_group: Option<String>,
}

impl From<ResultRecord> for ResultResponse {
    fn from(record: ResultRecord) -> Self {
        let answers = record
            .answers
            .iter()
            .map(|(id, value)| (id.to_string(), value.value()))
            .collect();
        Self {
            code: record.code.to_string(),
            answers,
            domain_scores: record.domain_scores,
            domain_max: record.domain_max,
            total_score: record.total_score,
            total_max: record.total_max,
            tom_level: record.tom_level,
            timestamp: record.timestamp.to_rfc3339(),
            age_group: record.age_group,
        }
    }
}

/// Standard error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: "BAD_REQUEST".to_string(),
            message: message.into(),
        }
    }

    pub fn not_found(resource_type: &str, id: &str) -> Self {
        Self {
            code: "NOT_FOUND".to_string(),
            message: format!("{} not found: {}", resource_type, id),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            code: "INTERNAL_ERROR".to_string(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::QuestionCatalog;

    #[test]
    fn submit_request_deserializes_loose_answer_values() {
        let json = r#"{"answers": {"1": 3, "2": "2"}, "age_group": "9-11"}"#;
        let req: SubmitQuestionnaireRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.answers.len(), 2);
        assert_eq!(req.age_group.as_deref(), Some("9-11"));
    }

    #[test]
    fn submit_request_age_group_is_optional() {
        let json = r#"{"answers": {}}"#;
        let req: SubmitQuestionnaireRequest = serde_json::from_str(json).unwrap();
        assert!(req.age_group.is_none());
    }

    #[test]
    fn question_response_carries_domain_label() {
        let catalog = QuestionCatalog::global();
        let first = &catalog.all()[0];
        let dto = QuestionResponse::from(first);
        assert_eq!(dto.id, 1);
        assert_eq!(dto.domain_label, first.domain.label());
    }

    #[test]
    fn error_response_not_found_names_the_resource() {
        let error = ErrorResponse::not_found("Result", "CS-0A1B2C");
        assert_eq!(error.code, "NOT_FOUND");
        assert!(error.message.contains("CS-0A1B2C"));
    }
}
