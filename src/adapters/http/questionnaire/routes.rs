//! HTTP routes for questionnaire endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{get_result, list_questions, submit_questionnaire, QuestionnaireHandlers};

/// Creates the questionnaire router with all endpoints.
pub fn questionnaire_routes(handlers: QuestionnaireHandlers) -> Router {
    Router::new()
        .route("/questions", get(list_questions))
        .route("/submissions", post(submit_questionnaire))
        .route("/results/:code", get(get_result))
        .with_state(handlers)
}
