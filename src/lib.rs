//! Social Compass - Self-Administered Social Skills Questionnaire
//!
//! A respondent answers 39 Likert-scale statements; the system aggregates the
//! answers into six domain sub-scores and an approximate theory-of-mind level,
//! persists the result under a generated retrieval code, and notifies a
//! practitioner who can later look the result up by that code.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
