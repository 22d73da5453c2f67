//! HTTP adapter for questionnaire endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    ErrorResponse, QuestionResponse, ResultResponse, SubmissionResponse,
    SubmitQuestionnaireRequest,
};
pub use handlers::QuestionnaireHandlers;
pub use routes::questionnaire_routes;
