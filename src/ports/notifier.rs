//! Result Notifier port - practitioner notification.
//!
//! Given a finished result, an implementation delivers a human-readable
//! summary to one fixed practitioner address. Delivery failure is reported to
//! the caller but must never affect the durability of the already-persisted
//! result; there is no automatic retry.

use async_trait::async_trait;

use crate::domain::scoring::ResultRecord;

/// Errors that can occur while delivering a notification.
#[derive(Debug, thiserror::Error)]
pub enum NotificationError {
    #[error("email delivery failed: {0}")]
    DeliveryFailed(String),

    #[error("email provider rejected the message (status {status}): {body}")]
    Rejected { status: u16, body: String },
}

/// Port for notifying a practitioner of a finished result.
#[async_trait]
pub trait ResultNotifier: Send + Sync {
    /// Delivers a summary of `record` to the configured practitioner.
    async fn notify(&self, record: &ResultRecord) -> Result<(), NotificationError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    // Compile-time check that the trait is object-safe
    #[allow(dead_code)]
    fn assert_object_safe(_: &dyn ResultNotifier) {}

    #[test]
    fn errors_render_their_cause() {
        let err = NotificationError::DeliveryFailed("connection refused".to_string());
        assert!(err.to_string().contains("connection refused"));

        let err = NotificationError::Rejected {
            status: 422,
            body: "invalid recipient".to_string(),
        };
        assert!(err.to_string().contains("422"));
        assert!(err.to_string().contains("invalid recipient"));
    }
}
