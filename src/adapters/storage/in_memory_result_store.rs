//! In-memory Result Store adapter for tests and local development.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::foundation::RetrievalCode;
use crate::domain::scoring::ResultRecord;
use crate::ports::{ResultStore, ResultStoreError};

/// Volatile store with the same contract as the file-backed one.
#[derive(Debug, Default)]
pub struct InMemoryResultStore {
    records: RwLock<BTreeMap<RetrievalCode, ResultRecord>>,
}

impl InMemoryResultStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }
}

#[async_trait]
impl ResultStore for InMemoryResultStore {
    async fn put(&self, record: &ResultRecord) -> Result<(), ResultStoreError> {
        let mut records = self.records.write().await;
        if records.contains_key(&record.code) {
            return Err(ResultStoreError::DuplicateCode(record.code.clone()));
        }
        records.insert(record.code.clone(), record.clone());
        Ok(())
    }

    async fn get(&self, code: &RetrievalCode) -> Result<ResultRecord, ResultStoreError> {
        self.records
            .read()
            .await
            .get(code)
            .cloned()
            .ok_or_else(|| ResultStoreError::NotFound(code.clone()))
    }

    async fn contains(&self, code: &RetrievalCode) -> Result<bool, ResultStoreError> {
        Ok(self.records.read().await.contains_key(code))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::scoring::{compute_scores, AnswerSheet, TomPolicy};

    fn test_record(code: &str) -> ResultRecord {
        let answers = AnswerSheet::new();
        let summary = compute_scores(&answers, TomPolicy::Threshold);
        ResultRecord::new(RetrievalCode::parse(code).unwrap(), answers, summary, None)
    }

    #[tokio::test]
    async fn put_get_contains_behave_like_the_contract() {
        let store = InMemoryResultStore::new();
        let record = test_record("CS-0A1B2C");

        assert!(!store.contains(&record.code).await.unwrap());
        store.put(&record).await.unwrap();
        assert!(store.contains(&record.code).await.unwrap());
        assert_eq!(store.get(&record.code).await.unwrap(), record);
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn duplicate_put_is_rejected() {
        let store = InMemoryResultStore::new();
        let record = test_record("CS-0A1B2C");
        store.put(&record).await.unwrap();
        assert!(matches!(
            store.put(&record).await,
            Err(ResultStoreError::DuplicateCode(_))
        ));
    }

    #[tokio::test]
    async fn missing_code_is_not_found() {
        let store = InMemoryResultStore::new();
        let code = RetrievalCode::parse("CS-FFAA00").unwrap();
        assert!(matches!(
            store.get(&code).await,
            Err(ResultStoreError::NotFound(_))
        ));
    }
}
