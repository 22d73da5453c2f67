//! Scoring module - answer normalization, aggregation and result records.

mod answer_sheet;
mod engine;
mod result_record;

pub use answer_sheet::AnswerSheet;
pub use engine::{compute_scores, ScoreSummary, TomPolicy};
pub use result_record::ResultRecord;
