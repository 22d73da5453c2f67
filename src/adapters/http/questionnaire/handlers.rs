//! HTTP handlers for questionnaire endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::application::handlers::{
    LookupResultHandler, LookupResultQuery, SubmissionError, SubmitQuestionnaireCommand,
    SubmitQuestionnaireHandler,
};
use crate::domain::catalog::QuestionCatalog;
use crate::domain::foundation::RetrievalCode;
use crate::domain::scoring::AnswerSheet;
use crate::ports::ResultStoreError;

use super::dto::{
    ErrorResponse, QuestionResponse, ResultResponse, SubmissionResponse,
    SubmitQuestionnaireRequest,
};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct QuestionnaireHandlers {
    submit_handler: Arc<SubmitQuestionnaireHandler>,
    lookup_handler: Arc<LookupResultHandler>,
}

impl QuestionnaireHandlers {
    pub fn new(
        submit_handler: Arc<SubmitQuestionnaireHandler>,
        lookup_handler: Arc<LookupResultHandler>,
    ) -> Self {
        Self {
            submit_handler,
            lookup_handler,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// GET /api/questions - List the question catalog
pub async fn list_questions() -> Response {
    let questions: Vec<QuestionResponse> = QuestionCatalog::global()
        .all()
        .iter()
        .map(QuestionResponse::from)
        .collect();
    (StatusCode::OK, Json(questions)).into_response()
}

/// POST /api/submissions - Score and store a completed questionnaire
pub async fn submit_questionnaire(
    State(handlers): State<QuestionnaireHandlers>,
    Json(req): Json<SubmitQuestionnaireRequest>,
) -> Response {
    let cmd = SubmitQuestionnaireCommand {
        answers: AnswerSheet::from_raw(req.answers),
        age_group: req.age_group,
    };

    match handlers.submit_handler.handle(cmd).await {
        Ok(result) => {
            let response = SubmissionResponse {
                code: result.record.code.to_string(),
                domain_scores: result.record.domain_scores,
                domain_max: result.record.domain_max,
                total_score: result.record.total_score,
                total_max: result.record.total_max,
                tom_level: result.record.tom_level,
                notification_delivered: result.notification_delivered,
            };
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(e) => handle_submission_error(e),
    }
}

/// GET /api/results/:code - Retrieve a stored result by its code
pub async fn get_result(
    State(handlers): State<QuestionnaireHandlers>,
    Path(code): Path<String>,
) -> Response {
    let code = match RetrievalCode::parse(&code) {
        Ok(code) => code,
        Err(_) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::bad_request("Invalid retrieval code")),
            )
                .into_response()
        }
    };

    match handlers.lookup_handler.handle(LookupResultQuery { code }).await {
        Ok(record) => {
            let response: ResultResponse = record.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(ResultStoreError::NotFound(code)) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::not_found("Result", &code.to_string())),
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "result lookup failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::internal("An unexpected error occurred")),
            )
                .into_response()
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

fn handle_submission_error(error: SubmissionError) -> Response {
    tracing::error!(error = %error, "submission failed");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse::internal("Could not store the submission")),
    )
        .into_response()
}
