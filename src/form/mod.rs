//! Form State Container
//!
//! The shared state object behind a set of named input fields: current
//! values plus validation errors, mutated through one update function per
//! field name. Field renderers hold no state of their own.

mod schema;

pub use schema::{validate, validate_field, Rules, Schema};

use std::collections::BTreeMap;

/// In-memory values and errors for a set of named fields
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    values: BTreeMap<&'static str, String>,
    errors: BTreeMap<&'static str, String>,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed values, dropping any previous values and errors
    pub fn reset(&mut self, pairs: &[(&'static str, &str)]) {
        self.values = pairs
            .iter()
            .map(|(name, value)| (*name, value.to_string()))
            .collect();
        self.errors.clear();
    }

    /// Current value for a field (empty if never written)
    pub fn value(&self, name: &str) -> &str {
        self.values.get(name).map(String::as_str).unwrap_or("")
    }

    /// Write a field value; the field's stale error is cleared so the user
    /// sees feedback only after the next blur or submit
    pub fn set_value(&mut self, name: &'static str, value: String) {
        self.values.insert(name, value);
        self.errors.remove(name);
    }

    /// Current error message for a field, if any
    pub fn error(&self, name: &str) -> Option<&str> {
        self.errors.get(name).map(String::as_str)
    }

    /// Re-check one field against the schema (blur handler)
    pub fn validate_field(&mut self, schema: &Schema, name: &'static str) {
        match validate_field(schema, name, self.value(name)) {
            Some(message) => {
                self.errors.insert(name, message);
            }
            None => {
                self.errors.remove(name);
            }
        }
    }

    /// Check every field; returns true when the form is valid
    pub fn validate(&mut self, schema: &Schema) -> bool {
        self.errors = validate(schema, &self.values);
        self.errors.is_empty()
    }
}
