//! Submission use cases: submitting a questionnaire and looking up a result.

mod lookup_result;
mod submit_questionnaire;

pub use lookup_result::{LookupResultHandler, LookupResultQuery};
pub use submit_questionnaire::{
    SubmissionError, SubmitQuestionnaireCommand, SubmitQuestionnaireHandler,
    SubmitQuestionnaireResult,
};
