//! Deterministic tree transforms over parsed JSON values
//!
//! Both walks rebuild the tree; the input value is never mutated.

pub mod case;

pub use case::{convert_case, CaseStyle};

use serde_json::{Map, Value};

/// Recursively rebuild a value with object keys in ascending lexicographic
/// order at every level. Arrays keep their element order; scalars pass
/// through unchanged.
pub fn sort_keys_deep(value: &Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut entries: Vec<(&String, &Value)> = map.iter().collect();
            entries.sort_by(|a, b| a.0.cmp(b.0));

            let mut sorted = Map::new();
            for (key, child) in entries {
                sorted.insert(key.clone(), sort_keys_deep(child));
            }
            Value::Object(sorted)
        }
        Value::Array(items) => Value::Array(items.iter().map(sort_keys_deep).collect()),
        other => other.clone(),
    }
}

/// Recursively rebuild a value with every object key rewritten into the
/// given case style.
///
/// If two original keys collapse to the same converted name, the later one
/// (in original iteration order) overwrites the earlier. This is lossy and
/// intentional.
pub fn remap_keys_deep(value: &Value, style: CaseStyle) -> Value {
    match value {
        Value::Object(map) => {
            let mut remapped = Map::new();
            for (key, child) in map {
                remapped.insert(convert_case(key, style), remap_keys_deep(child, style));
            }
            Value::Object(remapped)
        }
        Value::Array(items) => Value::Array(
            items
                .iter()
                .map(|item| remap_keys_deep(item, style))
                .collect(),
        ),
        other => other.clone(),
    }
}
