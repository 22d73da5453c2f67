//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between the
//! domain and the outside world. Adapters implement these ports.
//!
//! - `ResultStore` - keyed persistence of result records
//! - `ResultNotifier` - practitioner notification of a finished result

mod notifier;
mod result_store;

pub use notifier::{NotificationError, ResultNotifier};
pub use result_store::{ResultStore, ResultStoreError};
