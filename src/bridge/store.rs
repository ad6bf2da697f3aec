//! Client-side cache of handler-owned state slices.
//!
//! Each slice is held as an `Arc`-shared immutable map. Applying a delta
//! builds a fresh map and swaps it in whole, so a [`Snapshot`] taken before
//! or after an apply always reflects complete deltas only.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

pub type Fields = BTreeMap<String, Value>;

/// Incremental update to a subset of one slice's fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StateDelta {
    pub slice_name: String,
    #[serde(default)]
    pub changed_fields: Fields,
}

impl StateDelta {
    #[cfg(test)]
    pub fn new(slice_name: impl Into<String>, changed_fields: Fields) -> Self {
        Self {
            slice_name: slice_name.into(),
            changed_fields,
        }
    }
}

/// Immutable, consistent read of a slice.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    fields: Arc<Fields>,
    version: u64,
}

impl Snapshot {
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    pub fn get_i64(&self, field: &str) -> Option<i64> {
        self.get(field).and_then(Value::as_i64)
    }

    pub fn get_str(&self, field: &str) -> Option<&str> {
        self.get(field).and_then(Value::as_str)
    }

    pub fn get_bool(&self, field: &str) -> Option<bool> {
        self.get(field).and_then(Value::as_bool)
    }

    /// Number of deltas that changed this slice so far.
    pub fn version(&self) -> u64 {
        self.version
    }
}

#[derive(Debug, Default)]
pub struct StateStore {
    slices: HashMap<String, Snapshot>,
}

impl StateStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Latest snapshot of `slice`. Unknown slices read as empty.
    pub fn subscribe(&self, slice: &str) -> Snapshot {
        self.slices.get(slice).cloned().unwrap_or_default()
    }

    /// Apply a delta additively and return the fields whose value changed.
    ///
    /// Fields carried with an unchanged value are not reported and do not
    /// bump the slice version.
    pub fn apply(&mut self, delta: StateDelta) -> Vec<String> {
        let StateDelta {
            slice_name,
            changed_fields,
        } = delta;
        let current = self.subscribe(&slice_name);

        let mut next: Fields = current.fields.as_ref().clone();
        let mut changed = Vec::new();
        for (name, value) in changed_fields {
            if next.get(&name) != Some(&value) {
                changed.push(name.clone());
                next.insert(name, value);
            }
        }

        if !changed.is_empty() {
            self.slices.insert(
                slice_name,
                Snapshot {
                    fields: Arc::new(next),
                    version: current.version + 1,
                },
            );
        }
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn delta(pairs: &[(&str, Value)]) -> StateDelta {
        StateDelta::new(
            "practice",
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.clone()))
                .collect(),
        )
    }

    #[test]
    fn test_unknown_slice_is_empty() {
        let store = StateStore::new();
        let snap = store.subscribe("nope");
        assert_eq!(snap.version(), 0);
        assert!(snap.get("num1").is_none());
    }

    #[test]
    fn test_apply_is_additive() {
        let mut store = StateStore::new();
        store.apply(delta(&[("num1", json!(12)), ("num2", json!(30))]));
        let changed = store.apply(delta(&[("num2", json!(45))]));

        assert_eq!(changed, vec!["num2".to_string()]);
        let snap = store.subscribe("practice");
        assert_eq!(snap.get_i64("num1"), Some(12));
        assert_eq!(snap.get_i64("num2"), Some(45));
        assert_eq!(snap.version(), 2);
    }

    #[test]
    fn test_unchanged_values_are_not_reported() {
        let mut store = StateStore::new();
        store.apply(delta(&[("feedback_type", json!("success"))]));
        let changed = store.apply(delta(&[("feedback_type", json!("success"))]));

        assert!(changed.is_empty());
        assert_eq!(store.subscribe("practice").version(), 1);
    }

    #[test]
    fn test_held_snapshot_is_never_mutated() {
        let mut store = StateStore::new();
        store.apply(delta(&[("num1", json!(1)), ("num2", json!(2))]));
        let before = store.subscribe("practice");

        store.apply(delta(&[("num1", json!(10)), ("num2", json!(20))]));

        assert_eq!(before.get_i64("num1"), Some(1));
        assert_eq!(before.get_i64("num2"), Some(2));
        let after = store.subscribe("practice");
        assert_eq!(after.get_i64("num1"), Some(10));
        assert_eq!(after.get_i64("num2"), Some(20));
    }

    #[test]
    fn test_sequential_deltas_are_observed_together() {
        let mut store = StateStore::new();
        store.apply(delta(&[("num1", json!(11)), ("num2", json!(22))]));

        store.apply(delta(&[("num1", json!(33))]));
        store.apply(delta(&[("num2", json!(44))]));

        let snap = store.subscribe("practice");
        assert_eq!(
            (snap.get_i64("num1"), snap.get_i64("num2")),
            (Some(33), Some(44))
        );
    }

    #[test]
    fn test_typed_accessors_reject_wrong_types() {
        let mut store = StateStore::new();
        store.apply(delta(&[
            ("game_over", json!(true)),
            ("feedback_message", json!("ok")),
            ("score", json!("three")),
        ]));
        let snap = store.subscribe("practice");
        assert_eq!(snap.get_bool("game_over"), Some(true));
        assert_eq!(snap.get_str("feedback_message"), Some("ok"));
        assert_eq!(snap.get_i64("score"), None);
    }

    #[test]
    fn test_delta_wire_shape() {
        let parsed: StateDelta = serde_json::from_str(
            r#"{"sliceName":"practice","changedFields":{"num1":7}}"#,
        )
        .unwrap();
        assert_eq!(parsed, delta(&[("num1", json!(7))]));
    }
}
