//! LookupResultHandler - Query handler for retrieving a stored result.

use std::sync::Arc;

use crate::domain::foundation::RetrievalCode;
use crate::domain::scoring::ResultRecord;
use crate::ports::{ResultStore, ResultStoreError};

/// Query to fetch the record stored under a retrieval code.
#[derive(Debug, Clone)]
pub struct LookupResultQuery {
    pub code: RetrievalCode,
}

/// Handler for practitioner lookups.
pub struct LookupResultHandler {
    store: Arc<dyn ResultStore>,
}

impl LookupResultHandler {
    pub fn new(store: Arc<dyn ResultStore>) -> Self {
        Self { store }
    }

    /// Returns the stored record, or `ResultStoreError::NotFound` for an
    /// unrecognized code - an expected outcome, not an internal error.
    pub async fn handle(&self, query: LookupResultQuery) -> Result<ResultRecord, ResultStoreError> {
        self.store.get(&query.code).await
    }
}
