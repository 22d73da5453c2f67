//! SubmitQuestionnaireHandler - Command handler for finished questionnaires.

use std::sync::Arc;

use crate::domain::foundation::RetrievalCode;
use crate::domain::scoring::{compute_scores, AnswerSheet, ResultRecord, TomPolicy};
use crate::ports::{ResultNotifier, ResultStore, ResultStoreError};

/// Bounded retry budget for minting a unique code. The code space holds
/// 16.7 million values, so exhausting this indicates a broken store or
/// randomness source rather than genuine collisions.
const MAX_CODE_ATTEMPTS: u32 = 16;

/// Command carrying a respondent's normalized answers.
#[derive(Debug, Clone)]
pub struct SubmitQuestionnaireCommand {
    pub answers: AnswerSheet,
    pub age_group: Option<String>,
}

/// Result of a successful submission.
#[derive(Debug, Clone)]
pub struct SubmitQuestionnaireResult {
    pub record: ResultRecord,
    /// Whether the practitioner summary went out. Delivery failure never
    /// fails the submission; the record is already durably stored.
    pub notification_delivered: bool,
}

/// Errors surfaced by the submission use case.
#[derive(Debug, thiserror::Error)]
pub enum SubmissionError {
    #[error("could not mint a unique retrieval code after {attempts} attempts")]
    CodeSpaceExhausted { attempts: u32 },

    #[error(transparent)]
    Store(#[from] ResultStoreError),
}

/// Handler for scoring, persisting and announcing a submission.
pub struct SubmitQuestionnaireHandler {
    store: Arc<dyn ResultStore>,
    notifier: Arc<dyn ResultNotifier>,
    policy: TomPolicy,
}

impl SubmitQuestionnaireHandler {
    pub fn new(
        store: Arc<dyn ResultStore>,
        notifier: Arc<dyn ResultNotifier>,
        policy: TomPolicy,
    ) -> Self {
        Self {
            store,
            notifier,
            policy,
        }
    }

    pub async fn handle(
        &self,
        cmd: SubmitQuestionnaireCommand,
    ) -> Result<SubmitQuestionnaireResult, SubmissionError> {
        // 1. Score the sheet
        let summary = compute_scores(&cmd.answers, self.policy);

        // 2. Mint a code and persist, retrying on collision
        let mut stored = None;
        for attempt in 1..=MAX_CODE_ATTEMPTS {
            let code = RetrievalCode::generate();
            let record = ResultRecord::new(
                code,
                cmd.answers.clone(),
                summary.clone(),
                cmd.age_group.clone(),
            );
            match self.store.put(&record).await {
                Ok(()) => {
                    stored = Some(record);
                    break;
                }
                Err(ResultStoreError::DuplicateCode(code)) => {
                    tracing::warn!(%code, attempt, "retrieval code collision, regenerating");
                }
                Err(e) => return Err(e.into()),
            }
        }
        let record = stored.ok_or(SubmissionError::CodeSpaceExhausted {
            attempts: MAX_CODE_ATTEMPTS,
        })?;

        tracing::info!(
            code = %record.code,
            total_score = record.total_score,
            tom_level = record.tom_level,
            "submission stored"
        );

        // 3. Notify the practitioner; failure is reported, never propagated
        let notification_delivered = match self.notifier.notify(&record).await {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(
                    code = %record.code,
                    error = %e,
                    "practitioner notification failed; submission kept"
                );
                false
            }
        };

        Ok(SubmitQuestionnaireResult {
            record,
            notification_delivered,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryResultStore;
    use crate::domain::catalog::QuestionId;
    use crate::domain::foundation::AnswerValue;
    use crate::ports::NotificationError;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Mutex;

    struct RecordingNotifier {
        notified: Mutex<Vec<RetrievalCode>>,
        fail: bool,
    }

    impl RecordingNotifier {
        fn new() -> Self {
            Self {
                notified: Mutex::new(Vec::new()),
                fail: false,
            }
        }

        fn failing() -> Self {
            Self {
                notified: Mutex::new(Vec::new()),
                fail: true,
            }
        }

        fn notified_codes(&self) -> Vec<RetrievalCode> {
            self.notified.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl ResultNotifier for RecordingNotifier {
        async fn notify(&self, record: &ResultRecord) -> Result<(), NotificationError> {
            if self.fail {
                return Err(NotificationError::DeliveryFailed(
                    "simulated transport failure".to_string(),
                ));
            }
            self.notified.lock().unwrap().push(record.code.clone());
            Ok(())
        }
    }

    /// Store that rejects every put as a duplicate, to exhaust the retry budget.
    struct AlwaysDuplicateStore {
        attempts: AtomicU32,
    }

    #[async_trait]
    impl ResultStore for AlwaysDuplicateStore {
        async fn put(&self, record: &ResultRecord) -> Result<(), ResultStoreError> {
            self.attempts.fetch_add(1, Ordering::SeqCst);
            Err(ResultStoreError::DuplicateCode(record.code.clone()))
        }

        async fn get(&self, code: &RetrievalCode) -> Result<ResultRecord, ResultStoreError> {
            Err(ResultStoreError::NotFound(code.clone()))
        }

        async fn contains(&self, _code: &RetrievalCode) -> Result<bool, ResultStoreError> {
            Ok(true)
        }
    }

    fn full_sheet() -> AnswerSheet {
        let mut sheet = AnswerSheet::new();
        for id in 1..=39 {
            sheet.insert(QuestionId::new(id), AnswerValue::Sometimes);
        }
        sheet
    }

    #[tokio::test]
    async fn stores_scored_record_and_notifies() {
        let store = Arc::new(InMemoryResultStore::new());
        let notifier = Arc::new(RecordingNotifier::new());
        let handler =
            SubmitQuestionnaireHandler::new(store.clone(), notifier.clone(), TomPolicy::Threshold);

        let result = handler
            .handle(SubmitQuestionnaireCommand {
                answers: full_sheet(),
                age_group: Some("6-8".to_string()),
            })
            .await
            .unwrap();

        assert!(result.notification_delivered);
        assert_eq!(result.record.total_score, 39);
        assert_eq!(result.record.total_max, 117);
        assert_eq!(result.record.age_group.as_deref(), Some("6-8"));

        let stored = store.get(&result.record.code).await.unwrap();
        assert_eq!(stored, result.record);
        assert_eq!(notifier.notified_codes(), vec![result.record.code]);
    }

    #[tokio::test]
    async fn notification_failure_does_not_fail_the_submission() {
        let store = Arc::new(InMemoryResultStore::new());
        let notifier = Arc::new(RecordingNotifier::failing());
        let handler =
            SubmitQuestionnaireHandler::new(store.clone(), notifier, TomPolicy::Threshold);

        let result = handler
            .handle(SubmitQuestionnaireCommand {
                answers: full_sheet(),
                age_group: None,
            })
            .await
            .unwrap();

        assert!(!result.notification_delivered);
        // The record is still durably stored.
        assert!(store.contains(&result.record.code).await.unwrap());
    }

    #[tokio::test]
    async fn repeated_submissions_mint_distinct_codes() {
        let store = Arc::new(InMemoryResultStore::new());
        let notifier = Arc::new(RecordingNotifier::new());
        let handler =
            SubmitQuestionnaireHandler::new(store.clone(), notifier, TomPolicy::Threshold);

        let mut codes = std::collections::HashSet::new();
        for _ in 0..10 {
            let result = handler
                .handle(SubmitQuestionnaireCommand {
                    answers: full_sheet(),
                    age_group: None,
                })
                .await
                .unwrap();
            assert!(codes.insert(result.record.code.clone()));
        }
        assert_eq!(store.len().await, 10);
    }

    #[tokio::test]
    async fn exhausted_retry_budget_is_a_fatal_error() {
        let store = Arc::new(AlwaysDuplicateStore {
            attempts: AtomicU32::new(0),
        });
        let notifier = Arc::new(RecordingNotifier::new());
        let handler =
            SubmitQuestionnaireHandler::new(store.clone(), notifier.clone(), TomPolicy::Threshold);

        let result = handler
            .handle(SubmitQuestionnaireCommand {
                answers: full_sheet(),
                age_group: None,
            })
            .await;

        assert!(matches!(
            result,
            Err(SubmissionError::CodeSpaceExhausted { attempts: 16 })
        ));
        assert_eq!(store.attempts.load(Ordering::SeqCst), 16);
        // Nothing was stored, so nothing may be announced.
        assert!(notifier.notified_codes().is_empty());
    }

    #[tokio::test]
    async fn non_duplicate_store_errors_propagate() {
        struct BrokenStore;

        #[async_trait]
        impl ResultStore for BrokenStore {
            async fn put(&self, _record: &ResultRecord) -> Result<(), ResultStoreError> {
                Err(ResultStoreError::Io("disk full".to_string()))
            }

            async fn get(&self, code: &RetrievalCode) -> Result<ResultRecord, ResultStoreError> {
                Err(ResultStoreError::NotFound(code.clone()))
            }

            async fn contains(&self, _code: &RetrievalCode) -> Result<bool, ResultStoreError> {
                Ok(false)
            }
        }

        let handler = SubmitQuestionnaireHandler::new(
            Arc::new(BrokenStore),
            Arc::new(RecordingNotifier::new()),
            TomPolicy::Threshold,
        );

        let result = handler
            .handle(SubmitQuestionnaireCommand {
                answers: full_sheet(),
                age_group: None,
            })
            .await;

        assert!(matches!(result, Err(SubmissionError::Store(_))));
    }
}
