//! Field rulesets with create/update modes

use crate::core::error::FieldValidationError;
use serde_json::Value;

/// A single field validation rule
pub type Rule = Box<dyn Fn(&str, &Value) -> Result<(), String> + Send + Sync>;

/// Validation mode
///
/// `Create` checks every declared field (absent fields are seen as `null`,
/// so `required` fires). `Update` only checks fields the payload supplies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Create,
    Update,
}

/// An ordered set of per-field rules
///
/// Fields are checked in declaration order and each field's rules run in
/// listed order, stopping at the first failure for that field. The whole
/// ruleset always runs to completion so the caller gets every failing field
/// in one pass.
pub struct Ruleset {
    mode: Mode,
    fields: Vec<(&'static str, Vec<Rule>)>,
}

impl Ruleset {
    /// A ruleset for create payloads: all declared fields are checked
    pub fn create() -> Self {
        Self {
            mode: Mode::Create,
            fields: Vec::new(),
        }
    }

    /// A ruleset for update payloads: only supplied fields are checked
    pub fn update() -> Self {
        Self {
            mode: Mode::Update,
            fields: Vec::new(),
        }
    }

    /// Declare rules for a field
    pub fn field(mut self, name: &'static str, rules: Vec<Rule>) -> Self {
        self.fields.push((name, rules));
        self
    }

    /// Validate a payload, returning every failing field
    ///
    /// A non-object payload is treated as an empty object, so in create mode
    /// every required field fails.
    pub fn validate(&self, payload: &Value) -> Result<(), Vec<FieldValidationError>> {
        let object = payload.as_object();
        let mut errors = Vec::new();

        for (name, rules) in &self.fields {
            let supplied = object.is_some_and(|map| map.contains_key(*name));
            if self.mode == Mode::Update && !supplied {
                continue;
            }

            let value = object
                .and_then(|map| map.get(*name))
                .cloned()
                .unwrap_or(Value::Null);

            for rule in rules {
                if let Err(message) = rule(name, &value) {
                    errors.push(FieldValidationError {
                        field: name.to_string(),
                        message,
                    });
                    break;
                }
            }
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::validation::validators::*;
    use serde_json::json;

    fn sample_create() -> Ruleset {
        Ruleset::create()
            .field("name", vec![required(), is_string(), max_length(100)])
            .field("age", vec![required(), numeric(), min_value(18.0)])
    }

    fn sample_update() -> Ruleset {
        Ruleset::update()
            .field("name", vec![is_string(), max_length(100)])
            .field("age", vec![numeric(), min_value(18.0)])
    }

    #[test]
    fn test_create_valid_payload() {
        let result = sample_create().validate(&json!({"name": "Ana", "age": 30}));
        assert!(result.is_ok());
    }

    #[test]
    fn test_create_missing_field_fails_required() {
        let errors = sample_create()
            .validate(&json!({"age": 30}))
            .unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "name");
    }

    #[test]
    fn test_create_collects_all_failing_fields_in_order() {
        let errors = sample_create().validate(&json!({})).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].field, "name");
        assert_eq!(errors[1].field, "age");
    }

    #[test]
    fn test_create_stops_at_first_failure_per_field() {
        // Non-string name fails is_string; max_length is never consulted.
        let errors = sample_create()
            .validate(&json!({"name": 5, "age": 30}))
            .unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].message.contains("string"));
    }

    #[test]
    fn test_update_skips_absent_fields() {
        let result = sample_update().validate(&json!({"age": 40}));
        assert!(result.is_ok());
    }

    #[test]
    fn test_update_checks_supplied_fields() {
        let errors = sample_update()
            .validate(&json!({"age": 12}))
            .unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "age");
    }

    #[test]
    fn test_non_object_payload_fails_all_required() {
        let errors = sample_create().validate(&json!("nope")).unwrap_err();
        assert_eq!(errors.len(), 2);
    }
}
