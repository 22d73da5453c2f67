//! Practitioner notification adapters.

mod noop_notifier;
mod resend_notifier;
mod summary;

pub use noop_notifier::NoopNotifier;
pub use resend_notifier::ResendNotifier;
pub use summary::{render_summary, summary_subject};
