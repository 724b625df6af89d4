//! Reusable field validators
//!
//! Each validator checks one constraint against a JSON value and reports a
//! human-readable message on failure. Validators other than [`required`]
//! treat `null` as acceptable so that `required` (or the update-mode skip of
//! absent fields) stays the single source of presence checking.

use super::ruleset::Rule;
use crate::core::time::parse_datetime;
use regex::Regex;
use std::sync::OnceLock;

fn email_regex() -> &'static Regex {
    static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
    EMAIL_REGEX
        .get_or_init(|| Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").unwrap())
}

/// Validator: field must be present and not null
pub fn required() -> Rule {
    Box::new(|field: &str, value: &serde_json::Value| {
        if value.is_null() {
            Err(format!("The '{}' field is required", field))
        } else {
            Ok(())
        }
    })
}

/// Validator: value must be a JSON string
pub fn is_string() -> Rule {
    Box::new(|field: &str, value: &serde_json::Value| {
        if value.is_null() || value.is_string() {
            Ok(())
        } else {
            Err(format!("The '{}' field must be a string", field))
        }
    })
}

/// Validator: string must not exceed `max` characters
pub fn max_length(max: usize) -> Rule {
    Box::new(move |field: &str, value: &serde_json::Value| {
        if let Some(s) = value.as_str() {
            let len = s.chars().count();
            if len > max {
                return Err(format!(
                    "The '{}' field must not exceed {} characters (currently: {})",
                    field, max, len
                ));
            }
        }
        Ok(())
    })
}

/// Validator: value must be a well-formed email address
pub fn email() -> Rule {
    Box::new(|field: &str, value: &serde_json::Value| {
        if value.is_null() {
            return Ok(());
        }
        match value.as_str() {
            Some(s) if email_regex().is_match(s) => Ok(()),
            _ => Err(format!(
                "The '{}' field must be a well-formed email address",
                field
            )),
        }
    })
}

/// Validator: value must be a JSON number
pub fn numeric() -> Rule {
    Box::new(|field: &str, value: &serde_json::Value| {
        if value.is_null() || value.is_number() {
            Ok(())
        } else {
            Err(format!("The '{}' field must be numeric", field))
        }
    })
}

/// Validator: number must be at least `min`
pub fn min_value(min: f64) -> Rule {
    Box::new(move |field: &str, value: &serde_json::Value| {
        if let Some(num) = value.as_f64() {
            if num < min {
                return Err(format!(
                    "The '{}' field must be at least {} (value: {})",
                    field, min, num
                ));
            }
        }
        Ok(())
    })
}

/// Validator: number must not exceed `max`
pub fn max_value(max: f64) -> Rule {
    Box::new(move |field: &str, value: &serde_json::Value| {
        if let Some(num) = value.as_f64() {
            if num > max {
                return Err(format!(
                    "The '{}' field must not exceed {} (value: {})",
                    field, max, num
                ));
            }
        }
        Ok(())
    })
}

/// Validator: string must parse as a `YYYY-MM-DD HH:MM:SS` datetime
pub fn datetime() -> Rule {
    Box::new(|field: &str, value: &serde_json::Value| {
        if value.is_null() {
            return Ok(());
        }
        match value.as_str() {
            Some(s) if parse_datetime(s).is_ok() => Ok(()),
            _ => Err(format!(
                "The '{}' field must be a datetime in YYYY-MM-DD HH:MM:SS format",
                field
            )),
        }
    })
}
