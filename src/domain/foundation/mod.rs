//! Foundation module - Shared domain primitives.
//!
//! Contains value objects and error types that form the vocabulary
//! of the Social Compass domain.

mod answer_value;
mod errors;
mod retrieval_code;
mod timestamp;

pub use answer_value::AnswerValue;
pub use errors::ValidationError;
pub use retrieval_code::RetrievalCode;
pub use timestamp::Timestamp;
