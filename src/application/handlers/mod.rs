//! Command and query handlers.

pub mod submission;

pub use submission::{
    LookupResultHandler, LookupResultQuery, SubmissionError, SubmitQuestionnaireCommand,
    SubmitQuestionnaireHandler, SubmitQuestionnaireResult,
};
