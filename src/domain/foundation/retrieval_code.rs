//! Retrieval code value object.
//!
//! A retrieval code is the only credential granting access to a stored
//! result, so it is minted from a cryptographically secure random source
//! rather than a counter. Format: `CS-` followed by 6 uppercase hex digits.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::ValidationError;

const PREFIX: &str = "CS-";
const HEX_DIGITS: usize = 6;

/// Opaque code identifying one stored questionnaire result.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RetrievalCode(String);

impl RetrievalCode {
    /// Mints a new random code.
    ///
    /// Uniqueness against a store is the caller's responsibility: retry
    /// generation until the store accepts the code without a collision.
    pub fn generate() -> Self {
        let bytes = Uuid::new_v4().into_bytes();
        Self(format!(
            "{}{:02X}{:02X}{:02X}",
            PREFIX, bytes[0], bytes[1], bytes[2]
        ))
    }

    /// Parses a code string, normalizing the hex digits to uppercase.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let trimmed = input.trim();
        let rest = trimmed.strip_prefix(PREFIX).ok_or_else(|| {
            ValidationError::invalid_format("code", format!("missing {PREFIX} prefix"))
        })?;
        if rest.len() != HEX_DIGITS {
            return Err(ValidationError::invalid_format(
                "code",
                format!("expected {HEX_DIGITS} hex digits after the prefix"),
            ));
        }
        if !rest.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ValidationError::invalid_format(
                "code",
                "non-hexadecimal digit",
            ));
        }
        Ok(Self(format!("{}{}", PREFIX, rest.to_ascii_uppercase())))
    }

    /// Returns the code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for RetrievalCode {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for RetrievalCode {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<RetrievalCode> for String {
    fn from(code: RetrievalCode) -> Self {
        code.0
    }
}

impl fmt::Display for RetrievalCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
