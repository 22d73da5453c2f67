//! Result Store port - keyed persistence of questionnaire results.
//!
//! The store maps retrieval codes to result records and persists them across
//! process restarts. Codes are never reused while present: `put` enforces
//! non-collision defensively even though callers are expected to retry
//! generation on `DuplicateCode`.

use async_trait::async_trait;

use crate::domain::foundation::RetrievalCode;
use crate::domain::scoring::ResultRecord;

/// Errors that can occur during result store operations.
#[derive(Debug, thiserror::Error)]
pub enum ResultStoreError {
    #[error("a result is already stored under code {0}")]
    DuplicateCode(RetrievalCode),

    #[error("no result stored under code {0}")]
    NotFound(RetrievalCode),

    #[error("failed to serialize result document: {0}")]
    SerializationFailed(String),

    #[error("failed to deserialize result document: {0}")]
    DeserializationFailed(String),

    #[error("storage io error: {0}")]
    Io(String),
}

/// Port for persisting and retrieving result records by code.
///
/// Implementations must ensure:
/// - `put` operations are mutually exclusive relative to each other
/// - a `put` durably flushes before returning success; a crash mid-write
///   leaves either the previous complete state or the new one, never a torn
///   record
/// - `get` observes a fully-flushed snapshot, never a partial one
#[async_trait]
pub trait ResultStore: Send + Sync {
    /// Stores a record under its code.
    ///
    /// # Errors
    /// Returns `ResultStoreError::DuplicateCode` if the code is already taken.
    async fn put(&self, record: &ResultRecord) -> Result<(), ResultStoreError>;

    /// Retrieves the record stored under `code`.
    ///
    /// # Errors
    /// Returns `ResultStoreError::NotFound` if no record exists for the code.
    async fn get(&self, code: &RetrievalCode) -> Result<ResultRecord, ResultStoreError>;

    /// Whether a record exists under `code`.
    async fn contains(&self, code: &RetrievalCode) -> Result<bool, ResultStoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    // Compile-time check that the trait is object-safe
    #[allow(dead_code)]
    fn assert_object_safe(_: &dyn ResultStore) {}

    #[test]
    fn duplicate_code_error_names_the_code() {
        let code = RetrievalCode::parse("CS-0A1B2C").unwrap();
        let err = ResultStoreError::DuplicateCode(code);
        assert!(err.to_string().contains("CS-0A1B2C"));
        assert!(err.to_string().contains("already stored"));
    }

    #[test]
    fn not_found_error_names_the_code() {
        let code = RetrievalCode::parse("CS-FFAA00").unwrap();
        let err = ResultStoreError::NotFound(code);
        assert!(err.to_string().contains("no result stored"));
        assert!(err.to_string().contains("CS-FFAA00"));
    }
}
