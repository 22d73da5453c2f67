//! HTTP adapters - REST API implementations.

pub mod questionnaire;

pub use questionnaire::{questionnaire_routes, QuestionnaireHandlers};
