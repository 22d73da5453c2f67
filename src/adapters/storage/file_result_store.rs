//! File-based Result Store adapter.
//!
//! All records live in one JSON document mapping retrieval code to record.
//! Writes go to a temporary file, are fsynced, then renamed over the previous
//! document, so a crash mid-write leaves either the old complete state or the
//! new one. Puts take the write lock for their full duration, which both
//! enforces mutual exclusion between writers and keeps reads on a consistent
//! snapshot.
//!
//! Loading tolerates documents written by earlier format eras: legacy field
//! spellings and string-keyed answer maps are normalized at this boundary and
//! never leak into the domain.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tokio::sync::RwLock;

use crate::domain::foundation::RetrievalCode;
use crate::domain::scoring::ResultRecord;
use crate::ports::{ResultStore, ResultStoreError};

type Document = BTreeMap<RetrievalCode, ResultRecord>;

/// File-backed store for result records.
#[derive(Debug)]
pub struct FileResultStore {
    path: PathBuf,
    records: RwLock<Document>,
}

impl FileResultStore {
    /// Opens the store, loading the existing document if present.
    pub async fn load<P: AsRef<Path>>(path: P) -> Result<Self, ResultStoreError> {
        let path = path.as_ref().to_path_buf();
        let records = if path.exists() {
            let raw = fs::read_to_string(&path)
                .await
                .map_err(|e| ResultStoreError::Io(e.to_string()))?;
            let document: Document = serde_json::from_str(&raw)
                .map_err(|e| ResultStoreError::DeserializationFailed(e.to_string()))?;
            tracing::info!(path = %path.display(), records = document.len(), "loaded result store");
            document
        } else {
            Document::new()
        };
        Ok(Self {
            path,
            records: RwLock::new(records),
        })
    }

    /// Number of stored records.
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }

    async fn persist(&self, records: &Document) -> Result<(), ResultStoreError> {
        let json = serde_json::to_string_pretty(records)
            .map_err(|e| ResultStoreError::SerializationFailed(e.to_string()))?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .await
                    .map_err(|e| ResultStoreError::Io(e.to_string()))?;
            }
        }

        // Write-then-rename keeps the previous document intact until the new
        // one is fully on disk.
        let tmp_path = self.path.with_extension("json.tmp");
        let mut tmp = fs::File::create(&tmp_path)
            .await
            .map_err(|e| ResultStoreError::Io(e.to_string()))?;
        tmp.write_all(json.as_bytes())
            .await
            .map_err(|e| ResultStoreError::Io(e.to_string()))?;
        tmp.sync_all()
            .await
            .map_err(|e| ResultStoreError::Io(e.to_string()))?;
        drop(tmp);

        fs::rename(&tmp_path, &self.path)
            .await
            .map_err(|e| ResultStoreError::Io(e.to_string()))?;

        Ok(())
    }
}

#[async_trait]
impl ResultStore for FileResultStore {
    async fn put(&self, record: &ResultRecord) -> Result<(), ResultStoreError> {
        // The write lock is held across the disk flush: puts are mutually
        // exclusive and readers never observe an unflushed record.
        let mut records = self.records.write().await;
        if records.contains_key(&record.code) {
            return Err(ResultStoreError::DuplicateCode(record.code.clone()));
        }
        records.insert(record.code.clone(), record.clone());
        if let Err(e) = self.persist(&records).await {
            records.remove(&record.code);
            return Err(e);
        }
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
