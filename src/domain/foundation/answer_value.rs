//! Answer value object for the questionnaire's 0-3 Likert scale.

use std::fmt;

use super::ValidationError;

/// A single Likert answer: 0 (never) to 3 (always).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum AnswerValue {
    #[default]
    Never = 0,
    Sometimes = 1,
    Often = 2,
    Always = 3,
}

impl AnswerValue {
    /// Highest raw value on the scale.
    pub const MAX: u32 = 3;

    /// Creates an AnswerValue from an integer, returning error if out of range.
    pub fn try_from_i64(value: i64) -> Result<Self, ValidationError> {
        match value {
            0 => Ok(AnswerValue::Never),
            1 => Ok(AnswerValue::Sometimes),
            2 => Ok(AnswerValue::Often),
            3 => Ok(AnswerValue::Always),
            _ => Err(ValidationError::out_of_range("answer", 0, 3, value)),
        }
    }

    /// Returns the numeric value.
    pub fn value(&self) -> u32 {
        *self as u32
    }

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            AnswerValue::Never => "Never",
            AnswerValue::Sometimes => "Sometimes",
            AnswerValue::Often => "Often",
            AnswerValue::Always => "Always",
        }
    }
}

impl fmt::Display for AnswerValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}
