//! Teacher entity model and validation rulesets

use crate::core::validation::{Ruleset, validators::*};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A persisted teacher
///
/// `created_at`/`updated_at` are store-maintained and never appear in
/// transformed output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Teacher {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub funfact: String,
    pub age: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields accepted when creating a teacher
#[derive(Debug, Clone, Deserialize)]
pub struct TeacherDraft {
    pub name: String,
    pub email: String,
    pub funfact: String,
    pub age: i64,
}

/// Fields accepted when updating a teacher; only supplied fields overwrite
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TeacherPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub funfact: Option<String>,
    pub age: Option<i64>,
}

impl Teacher {
    pub fn from_draft(id: i64, draft: TeacherDraft) -> Self {
        let now = Utc::now();
        Self {
            id,
            name: draft.name,
            email: draft.email,
            funfact: draft.funfact,
            age: draft.age,
            created_at: now,
            updated_at: now,
        }
    }

    /// Merge supplied fields into the entity, fill-style
    pub fn apply(&mut self, patch: TeacherPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
        if let Some(funfact) = patch.funfact {
            self.funfact = funfact;
        }
        if let Some(age) = patch.age {
            self.age = age;
        }
        self.updated_at = Utc::now();
    }
}

/// Ruleset for create payloads: every field is required
pub fn create_rules() -> Ruleset {
    Ruleset::create()
        .field("name", vec![required(), is_string(), max_length(100)])
        .field("email", vec![required(), email()])
        .field("funfact", vec![required(), is_string()])
        .field(
            "age",
            vec![required(), numeric(), min_value(18.0), max_value(67.0)],
        )
}

/// Ruleset for update payloads: same constraints, presence optional
pub fn update_rules() -> Ruleset {
    Ruleset::update()
        .field("name", vec![is_string(), max_length(100)])
        .field("email", vec![email()])
        .field("funfact", vec![is_string()])
        .field("age", vec![numeric(), min_value(18.0), max_value(67.0)])
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn draft() -> TeacherDraft {
        TeacherDraft {
            name: "Ana".to_string(),
            email: "ana@x.com".to_string(),
            funfact: "Speaks four languages".to_string(),
            age: 30,
        }
    }

    #[test]
    fn test_apply_patch_only_overwrites_supplied_fields() {
        let mut teacher = Teacher::from_draft(1, draft());
        teacher.apply(TeacherPatch {
            age: Some(31),
            ..Default::default()
        });

        assert_eq!(teacher.age, 31);
        assert_eq!(teacher.name, "Ana");
        assert_eq!(teacher.email, "ana@x.com");
        assert_eq!(teacher.funfact, "Speaks four languages");
    }

    #[test]
    fn test_create_rules_accept_valid_payload() {
        let payload = json!({
            "name": "Ana",
            "email": "ana@x.com",
            "funfact": "Speaks four languages",
            "age": 30,
        });
        assert!(create_rules().validate(&payload).is_ok());
    }

    #[test]
    fn test_create_rules_reject_out_of_range_age() {
        let payload = json!({
            "name": "Ana",
            "email": "ana@x.com",
            "funfact": "...",
            "age": 200,
        });
        let errors = create_rules().validate(&payload).unwrap_err();
        assert_eq!(errors[0].field, "age");
    }

    #[test]
    fn test_create_rules_reject_bad_email() {
        let payload = json!({
            "name": "Ana",
            "email": "not-an-email",
            "funfact": "...",
            "age": 30,
        });
        let errors = create_rules().validate(&payload).unwrap_err();
        assert_eq!(errors[0].field, "email");
    }

    #[test]
    fn test_update_rules_allow_partial_payload() {
        assert!(update_rules().validate(&json!({"age": 40})).is_ok());
    }

    #[test]
    fn test_update_rules_still_constrain_supplied_fields() {
        let errors = update_rules().validate(&json!({"age": 12})).unwrap_err();
        assert_eq!(errors[0].field, "age");
    }
}
