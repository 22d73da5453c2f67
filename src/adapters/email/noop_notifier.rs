//! No-op notifier used when email delivery is not configured.

use async_trait::async_trait;

use crate::domain::scoring::ResultRecord;
use crate::ports::{NotificationError, ResultNotifier};

/// Accepts every notification without delivering anything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopNotifier;

#[async_trait]
impl ResultNotifier for NoopNotifier {
    async fn notify(&self, record: &ResultRecord) -> Result<(), NotificationError> {
        tracing::info!(
            code = %record.code,
            "email notifications disabled; skipping practitioner summary"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::RetrievalCode;
    use crate::domain::scoring::{compute_scores, AnswerSheet, TomPolicy};

    #[tokio::test]
    async fn always_succeeds() {
        let answers = AnswerSheet::new();
        let summary = compute_scores(&answers, TomPolicy::Threshold);
        let record = ResultRecord::new(
            RetrievalCode::parse("CS-0A1B2C").unwrap(),
            answers,
            summary,
            None,
        );
        assert!(NoopNotifier.notify(&record).await.is_ok());
    }
}
