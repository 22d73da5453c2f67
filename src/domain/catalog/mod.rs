//! The fixed question catalog.
//!
//! The 39 items are defined once in a static table and indexed lazily into a
//! process-wide registry. The catalog is read-only: every consumer goes
//! through [`QuestionCatalog::global()`], nothing re-declares items per
//! request.

mod items;
mod question;

pub use question::{Question, QuestionId, SkillDomain};

use std::collections::{BTreeMap, HashMap};

use once_cell::sync::Lazy;
use thiserror::Error;

use crate::domain::foundation::AnswerValue;

/// Lookup of a question id not present in the catalog.
///
/// Internal collaborators keep catalog and answer keys in sync, so this is a
/// programming-contract violation rather than a user-facing error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unknown question id: {0}")]
pub struct UnknownQuestion(pub QuestionId);

static CATALOG: Lazy<QuestionCatalog> = Lazy::new(|| QuestionCatalog::from_items(&items::ITEMS));

/// Process-wide, immutable registry over the item table.
#[derive(Debug)]
pub struct QuestionCatalog {
    by_id: HashMap<QuestionId, &'static Question>,
    domain_max: BTreeMap<SkillDomain, u32>,
}

impl QuestionCatalog {
    /// Returns the shared catalog instance.
    pub fn global() -> &'static QuestionCatalog {
        &CATALOG
    }

    fn from_items(items: &'static [Question]) -> Self {
        let mut by_id = HashMap::with_capacity(items.len());
        let mut domain_max: BTreeMap<SkillDomain, u32> = BTreeMap::new();
        for question in items {
            let previous = by_id.insert(question.id, question);
            debug_assert!(previous.is_none(), "duplicate question id {}", question.id);
            *domain_max.entry(question.domain).or_insert(0) += AnswerValue::MAX;
        }
        Self { by_id, domain_max }
    }

    /// All questions in canonical order (item numbering 1..=39).
    pub fn all(&self) -> &'static [Question] {
        &items::ITEMS
    }

    /// Number of items in the catalog.
    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }

    /// Whether `id` names a catalog question.
    pub fn contains(&self, id: QuestionId) -> bool {
        self.by_id.contains_key(&id)
    }

    /// Looks up a question by id.
    pub fn question(&self, id: QuestionId) -> Result<&'static Question, UnknownQuestion> {
        self.by_id.get(&id).copied().ok_or(UnknownQuestion(id))
    }

    /// The domain a question belongs to.
    pub fn domain_of(&self, id: QuestionId) -> Result<SkillDomain, UnknownQuestion> {
        self.question(id).map(|q| q.domain)
    }

    /// The theory-of-mind level a question probes.
    pub fn tom_level_of(&self, id: QuestionId) -> Result<u8, UnknownQuestion> {
        self.question(id).map(|q| q.tom_level)
    }

    /// Maximum attainable score per domain (item count x 3).
    pub fn domain_max(&self) -> &BTreeMap<SkillDomain, u32> {
        &self.domain_max
    }

    /// Maximum attainable total score (39 items x 3 = 117).
    pub fn total_max(&self) -> u32 {
        self.domain_max.values().sum()
    }
}
