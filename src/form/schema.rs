//! Declarative Field Validation
//!
//! A schema maps field names to constraint sets; `validate` is a pure check
//! that turns a value map into per-field error messages. Errors are data,
//! never exceptions.

use std::collections::BTreeMap;

/// Constraints for a single field, checked in declaration order:
/// required, then min length, then max length. The first failing
/// constraint supplies the field's message.
#[derive(Debug, Clone, Default)]
pub struct Rules {
    required: Option<&'static str>,
    min_len: Option<(usize, &'static str)>,
    max_len: Option<(usize, &'static str)>,
}

impl Rules {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn required(mut self, message: &'static str) -> Self {
        self.required = Some(message);
        self
    }

    pub fn min_len(mut self, len: usize, message: &'static str) -> Self {
        self.min_len = Some((len, message));
        self
    }

    pub fn max_len(mut self, len: usize, message: &'static str) -> Self {
        self.max_len = Some((len, message));
        self
    }

    /// Check one value against this rule set
    fn check(&self, value: &str) -> Option<&'static str> {
        // Lengths count characters, not bytes
        let len = value.chars().count();

        if value.is_empty() {
            return self.required;
        }
        if let Some((min, message)) = self.min_len {
            if len < min {
                return Some(message);
            }
        }
        if let Some((max, message)) = self.max_len {
            if len > max {
                return Some(message);
            }
        }
        None
    }
}

/// Field name -> constraint set
#[derive(Debug, Clone, Default)]
pub struct Schema {
    fields: Vec<(&'static str, Rules)>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(mut self, name: &'static str, rules: Rules) -> Self {
        self.fields.push((name, rules));
        self
    }

    pub fn rules(&self, name: &str) -> Option<&Rules> {
        self.fields
            .iter()
            .find(|(field, _)| *field == name)
            .map(|(_, rules)| rules)
    }
}

/// Validate a candidate value map; an empty result means valid.
pub fn validate(schema: &Schema, values: &BTreeMap<&'static str, String>) -> BTreeMap<&'static str, String> {
    let mut errors = BTreeMap::new();
    for (name, rules) in &schema.fields {
        let value = values.get(name).map(String::as_str).unwrap_or("");
        if let Some(message) = rules.check(value) {
            errors.insert(*name, message.to_string());
        }
    }
    errors
}

/// Validate a single field, as the blur handler does
pub fn validate_field(schema: &Schema, name: &'static str, value: &str) -> Option<String> {
    schema
        .rules(name)
        .and_then(|rules| rules.check(value))
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schema() -> Schema {
        Schema::new()
            .field(
                "title",
                Rules::new()
                    .required("Title is required")
                    .min_len(3, "Title length should be at least 3 characters"),
            )
            .field(
                "description",
                Rules::new().max_len(300, "Must be max 300 characters"),
            )
    }

    fn values(title: &str, description: &str) -> BTreeMap<&'static str, String> {
        BTreeMap::from([
            ("title", title.to_string()),
            ("description", description.to_string()),
        ])
    }

    #[test]
    fn valid_input_produces_no_errors() {
        let errors = validate(&schema(), &values("Buy milk", "2%"));
        assert!(errors.is_empty());
    }

    #[test]
    fn empty_title_is_required() {
        let errors = validate(&schema(), &values("", ""));
        assert_eq!(errors.get("title").unwrap(), "Title is required");
    }

    #[test]
    fn short_title_reports_min_length() {
        let errors = validate(&schema(), &values("Ab", "x"));
        assert_eq!(
            errors.get("title").unwrap(),
            "Title length should be at least 3 characters"
        );
        assert!(errors.get("description").is_none());
    }

    #[test]
    fn long_description_reports_max_length() {
        let long = "x".repeat(301);
        let errors = validate(&schema(), &values("Buy milk", &long));
        assert_eq!(errors.get("description").unwrap(), "Must be max 300 characters");
    }

    #[test]
    fn description_at_limit_passes() {
        let exact = "x".repeat(300);
        let errors = validate(&schema(), &values("Buy milk", &exact));
        assert!(errors.is_empty());
    }

    #[test]
    fn empty_description_is_fine() {
        let errors = validate(&schema(), &values("Buy milk", ""));
        assert!(errors.is_empty());
    }

    #[test]
    fn lengths_count_characters_not_bytes() {
        // Three CJK chars are nine UTF-8 bytes but satisfy min_len(3)
        let errors = validate(&schema(), &values("买牛奶", ""));
        assert!(errors.is_empty());
    }

    #[test]
    fn single_field_check_matches_full_validation() {
        let s = schema();
        assert_eq!(
            validate_field(&s, "title", "Ab").unwrap(),
            "Title length should be at least 3 characters"
        );
        assert!(validate_field(&s, "description", "ok").is_none());
    }
}
