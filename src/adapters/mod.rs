//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `storage` - result store backends (JSON file, in-memory)
//! - `email` - practitioner notification delivery
//! - `http` - the web API consumed by the presentation layer

pub mod email;
pub mod http;
pub mod storage;
