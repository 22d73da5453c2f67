//! Resend email delivery adapter.
//!
//! Implements the `ResultNotifier` port against the Resend HTTP API. The API
//! key is held in `secrecy::SecretString`; transport settings come from
//! [`EmailConfig`]. Callers isolate delivery failures from submission
//! durability, so this adapter only reports, never retries.

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde_json::json;

use crate::config::EmailConfig;
use crate::domain::scoring::ResultRecord;
use crate::ports::{NotificationError, ResultNotifier};

use super::summary::{render_summary, summary_subject};

const DEFAULT_API_BASE_URL: &str = "https://api.resend.com";

/// Notifier delivering practitioner summaries through Resend.
pub struct ResendNotifier {
    http_client: reqwest::Client,
    api_key: SecretString,
    api_base_url: String,
    from_header: String,
    recipient: String,
}

impl ResendNotifier {
    /// Create a notifier from the email configuration.
    pub fn new(config: &EmailConfig) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            api_key: config.resend_api_key.clone(),
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            from_header: config.from_header(),
            recipient: config.practitioner_email.clone(),
        }
    }

    /// Set a custom API base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }
}

#[async_trait]
impl ResultNotifier for ResendNotifier {
    async fn notify(&self, record: &ResultRecord) -> Result<(), NotificationError> {
        let payload = json!({
            "from": self.from_header,
            "to": [self.recipient],
            "subject": summary_subject(record),
            "text": render_summary(record),
        });

        let response = self
            .http_client
            .post(format!("{}/emails", self.api_base_url))
            .bearer_auth(self.api_key.expose_secret())
            .json(&payload)
            .send()
            .await
            .map_err(|e| NotificationError::DeliveryFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(
                code = %record.code,
                status = status.as_u16(),
                "email provider rejected the practitioner summary"
            );
            return Err(NotificationError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        tracing::info!(code = %record.code, "practitioner summary delivered");
        Ok(())
    }
}
