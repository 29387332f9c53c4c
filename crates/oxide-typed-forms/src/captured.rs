//! The keyed collection produced by one form submission.

use std::collections::BTreeMap;

use serde_json::{Map, Value};

use crate::validation::read_json_at;
use crate::value::TypedValue;

/// Captured values keyed by field identifier.
///
/// A fresh collection is produced on every submission; inserting an
/// identifier twice keeps the later value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CapturedForm {
    values: BTreeMap<String, TypedValue>,
}

impl CapturedForm {
    /// Creates an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a value, replacing any previous value for the identifier.
    pub fn insert(&mut self, id: impl Into<String>, value: TypedValue) -> Option<TypedValue> {
        self.values.insert(id.into(), value)
    }

    /// Gets the value captured for an identifier.
    pub fn get(&self, id: &str) -> Option<&TypedValue> {
        self.values.get(id)
    }

    /// Returns whether a value was captured for the identifier.
    pub fn contains(&self, id: &str) -> bool {
        self.values.contains_key(id)
    }

    /// Returns the number of captured fields.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns whether no field was captured.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates over captured fields in identifier order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &TypedValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Returns the captured identifiers in order.
    pub fn identifiers(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    /// Encodes every field's validated value as JSON.
    ///
    /// Fields that fail to read are encoded as `null`; this never fails.
    pub fn to_json(&self) -> Value {
        let object: Map<String, Value> = self
            .identifiers()
            .map(|id| {
                let value = read_json_at(id, self).unwrap_or(Value::Null);
                (id.to_string(), value)
            })
            .collect();
        Value::Object(object)
    }
}

impl<K: Into<String>> FromIterator<(K, TypedValue)> for CapturedForm {
    fn from_iter<I: IntoIterator<Item = (K, TypedValue)>>(iter: I) -> Self {
        let mut form = Self::new();
        for (id, value) in iter {
            form.insert(id, value);
        }
        form
    }
}
