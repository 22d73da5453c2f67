//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, codes, errors)
//! - `catalog` - The fixed 39-item question catalog
//! - `scoring` - Answer normalization, score aggregation, result records

pub mod catalog;
pub mod foundation;
pub mod scoring;
