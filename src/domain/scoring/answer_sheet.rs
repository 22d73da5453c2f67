//! Normalized answer map.
//!
//! Raw submissions and persisted records arrive with heterogeneous key
//! encodings (string or integer question ids) and occasionally junk entries
//! from older format eras. Normalization happens here, once, at construction:
//! everything downstream sees only catalog ids mapped to in-range values.
//! Malformed entries are dropped, never an error, but each drop is logged.

use std::collections::BTreeMap;

use serde::de::Deserializer;
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};

use crate::domain::catalog::{QuestionCatalog, QuestionId};
use crate::domain::foundation::AnswerValue;

/// Mapping from question id to Likert answer, normalized and in-range.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerSheet {
    entries: BTreeMap<QuestionId, AnswerValue>,
}

impl AnswerSheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a sheet from raw entries, dropping anything malformed.
    ///
    /// An entry survives only if its key parses as a catalog question id and
    /// its value is an integer (or integer-looking string) in `0..=3`.
    pub fn from_raw<I>(raw: I) -> Self
    where
        I: IntoIterator<Item = (String, serde_json::Value)>,
    {
        let catalog = QuestionCatalog::global();
        let mut entries = BTreeMap::new();
        for (key, value) in raw {
            let id = match key.trim().parse::<QuestionId>() {
                Ok(id) => id,
                Err(_) => {
                    tracing::debug!(key = %key, "dropping answer entry with non-numeric question id");
                    continue;
                }
            };
            if !catalog.contains(id) {
                tracing::debug!(%id, "dropping answer entry for question outside the catalog");
                continue;
            }
            let Some(raw_value) = coerce_integer(&value) else {
                tracing::debug!(%id, value = %value, "dropping answer entry with non-numeric value");
                continue;
            };
            match AnswerValue::try_from_i64(raw_value) {
                Ok(answer) => {
                    entries.insert(id, answer);
                }
                Err(_) => {
                    tracing::debug!(%id, value = raw_value, "dropping out-of-range answer value");
                }
            }
        }
        Self { entries }
    }

    /// Inserts an already-typed answer.
    pub fn insert(&mut self, id: QuestionId, value: AnswerValue) {
        self.entries.insert(id, value);
    }

    /// The answer given for a question, if it was answered.
    pub fn get(&self, id: QuestionId) -> Option<AnswerValue> {
        self.entries.get(&id).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (QuestionId, AnswerValue)> + '_ {
        self.entries.iter().map(|(id, value)| (*id, *value))
    }
}

fn coerce_integer(value: &serde_json::Value) -> Option<i64> {
    value
        .as_i64()
        .or_else(|| value.as_str().and_then(|s| s.trim().parse().ok()))
}

impl Serialize for AnswerSheet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        // Keys are serialized as strings; readers normalize on load.
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (id, value) in &self.entries {
            map.serialize_entry(&id.to_string(), &value.value())?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for AnswerSheet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = BTreeMap::<String, serde_json::Value>::deserialize(deserializer)?;
        Ok(AnswerSheet::from_raw(raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw(entries: &[(&str, serde_json::Value)]) -> Vec<(String, serde_json::Value)> {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn keeps_well_formed_entries() {
        let sheet = AnswerSheet::from_raw(raw(&[("1", json!(2)), ("39", json!(0))]));
        assert_eq!(sheet.len(), 2);
        assert_eq!(sheet.get(QuestionId::new(1)), Some(AnswerValue::Often));
        assert_eq!(sheet.get(QuestionId::new(39)), Some(AnswerValue::Never));
    }

    #[test]
    fn accepts_integer_looking_string_values() {
        let sheet = AnswerSheet::from_raw(raw(&[("5", json!("3")), ("6", json!(" 1 "))]));
        assert_eq!(sheet.get(QuestionId::new(5)), Some(AnswerValue::Always));
        assert_eq!(sheet.get(QuestionId::new(6)), Some(AnswerValue::Sometimes));
    }

    #[test]
    fn drops_non_numeric_keys() {
        let sheet = AnswerSheet::from_raw(raw(&[("abc", json!(2)), ("1", json!(1))]));
        assert_eq!(sheet.len(), 1);
    }

    #[test]
    fn drops_ids_outside_the_catalog() {
        let sheet = AnswerSheet::from_raw(raw(&[("9999", json!(2)), ("0", json!(1))]));
        assert!(sheet.is_empty());
    }

    #[test]
    fn drops_out_of_range_and_non_numeric_values() {
        let sheet = AnswerSheet::from_raw(raw(&[
            ("1", json!(7)),
            ("2", json!(-1)),
            ("3", json!("often")),
            ("4", json!(null)),
            ("5", json!(2)),
        ]));
        assert_eq!(sheet.len(), 1);
        assert_eq!(sheet.get(QuestionId::new(5)), Some(AnswerValue::Often));
    }

    #[test]
    fn serializes_with_string_keys_and_numeric_values() {
        let mut sheet = AnswerSheet::new();
        sheet.insert(QuestionId::new(3), AnswerValue::Always);
        let json = serde_json::to_value(&sheet).unwrap();
        assert_eq!(json, json!({"3": 3}));
    }

    #[test]
    fn deserializes_leniently() {
        let sheet: AnswerSheet =
            serde_json::from_value(json!({"1": 2, "abc": 3, "9999": 1, "2": "3"})).unwrap();
        assert_eq!(sheet.len(), 2);
        assert_eq!(sheet.get(QuestionId::new(1)), Some(AnswerValue::Often));
        assert_eq!(sheet.get(QuestionId::new(2)), Some(AnswerValue::Always));
    }

    #[test]
    fn round_trips_through_json() {
        let mut sheet = AnswerSheet::new();
        for id in 1..=39 {
            sheet.insert(QuestionId::new(id), AnswerValue::Sometimes);
        }
        let json = serde_json::to_string(&sheet).unwrap();
        let back: AnswerSheet = serde_json::from_str(&json).unwrap();
        assert_eq!(sheet, back);
    }
}
