//! Email configuration

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use super::error::ValidationError;

/// Practitioner email configuration (Resend).
///
/// Notifications are disabled when no API key is configured; the service
/// then runs with a no-op notifier.
#[derive(Debug, Clone, Deserialize)]
pub struct EmailConfig {
    /// Resend API key; empty means notifications are disabled
    #[serde(default = "empty_secret")]
    pub resend_api_key: SecretString,

    /// From email address
    #[serde(default = "default_from_email")]
    pub from_email: String,

    /// From name
    #[serde(default = "default_from_name")]
    pub from_name: String,

    /// The single practitioner address receiving result summaries
    #[serde(default)]
    pub practitioner_email: String,
}

impl EmailConfig {
    /// Whether notification delivery is configured at all.
    pub fn enabled(&self) -> bool {
        !self.resend_api_key.expose_secret().is_empty()
    }

    /// Get formatted "From" header value
    pub fn from_header(&self) -> String {
        format!("{} <{}>", self.from_name, self.from_email)
    }

    /// Validate email configuration
    ///
    /// A missing API key is valid (notifications disabled); everything else
    /// is only checked when a key is present.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.enabled() {
            return Ok(());
        }
        if !self.resend_api_key.expose_secret().starts_with("re_") {
            return Err(ValidationError::InvalidResendKey);
        }
        if !self.from_email.contains('@') {
            return Err(ValidationError::InvalidFromEmail);
        }
        if self.practitioner_email.is_empty() {
            return Err(ValidationError::MissingRequired("PRACTITIONER_EMAIL"));
        }
        if !self.practitioner_email.contains('@') {
            return Err(ValidationError::InvalidPractitionerEmail);
        }
        Ok(())
    }
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            resend_api_key: empty_secret(),
            from_email: default_from_email(),
            from_name: default_from_name(),
            practitioner_email: String::new(),
        }
    }
}

fn empty_secret() -> SecretString {
    SecretString::new(String::new())
}

fn default_from_email() -> String {
    "noreply@socialcompass.app".to_string()
}

fn default_from_name() -> String {
    "Social Compass".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn enabled_config() -> EmailConfig {
        EmailConfig {
            resend_api_key: SecretString::new("re_abcd1234".to_string()),
            practitioner_email: "practitioner@example.com".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn default_is_disabled_and_valid() {
        let config = EmailConfig::default();
        assert!(!config.enabled());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn from_header_formats_name_and_address() {
        let config = EmailConfig {
            from_email: "results@example.com".to_string(),
            from_name: "Results Desk".to_string(),
            ..Default::default()
        };
        assert_eq!(config.from_header(), "Results Desk <results@example.com>");
    }

    #[test]
    fn valid_enabled_config_passes() {
        assert!(enabled_config().validate().is_ok());
    }

    #[test]
    fn wrong_key_prefix_is_rejected() {
        let config = EmailConfig {
            resend_api_key: SecretString::new("sk_xxx".to_string()),
            ..enabled_config()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidResendKey)
        ));
    }

    #[test]
    fn missing_practitioner_address_is_rejected() {
        let config = EmailConfig {
            practitioner_email: String::new(),
            ..enabled_config()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::MissingRequired(_))
        ));
    }

    #[test]
    fn malformed_addresses_are_rejected() {
        let config = EmailConfig {
            from_email: "not-an-address".to_string(),
            ..enabled_config()
        };
        assert!(config.validate().is_err());

        let config = EmailConfig {
            practitioner_email: "not-an-address".to_string(),
            ..enabled_config()
        };
        assert!(config.validate().is_err());
    }
}
