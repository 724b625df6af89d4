//! Lesson entity model and validation rulesets

use crate::core::time;
use crate::core::validation::{Ruleset, validators::*};
use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// A persisted lesson, owned by exactly one teacher
///
/// No ordering between `start` and `end` is enforced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lesson {
    pub id: i64,
    pub title: String,
    pub description: String,
    #[serde(with = "time::wire")]
    pub start: NaiveDateTime,
    #[serde(with = "time::wire")]
    pub end: NaiveDateTime,
    pub teacher_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields accepted when creating a lesson
#[derive(Debug, Clone, Deserialize)]
pub struct LessonDraft {
    pub title: String,
    pub description: String,
    #[serde(with = "time::wire")]
    pub start: NaiveDateTime,
    #[serde(with = "time::wire")]
    pub end: NaiveDateTime,
    pub teacher_id: i64,
}

/// Fields accepted when updating a lesson; only supplied fields overwrite
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LessonPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    #[serde(with = "time::wire_opt")]
    pub start: Option<NaiveDateTime>,
    #[serde(with = "time::wire_opt")]
    pub end: Option<NaiveDateTime>,
    pub teacher_id: Option<i64>,
}

impl Lesson {
    pub fn from_draft(id: i64, draft: LessonDraft) -> Self {
        let now = Utc::now();
        Self {
            id,
            title: draft.title,
            description: draft.description,
            start: draft.start,
            end: draft.end,
            teacher_id: draft.teacher_id,
            created_at: now,
            updated_at: now,
        }
    }

    /// Merge supplied fields into the entity, fill-style
    pub fn apply(&mut self, patch: LessonPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(start) = patch.start {
            self.start = start;
        }
        if let Some(end) = patch.end {
            self.end = end;
        }
        if let Some(teacher_id) = patch.teacher_id {
            self.teacher_id = teacher_id;
        }
        self.updated_at = Utc::now();
    }
}

/// Ruleset for create payloads: every field is required
pub fn create_rules() -> Ruleset {
    Ruleset::create()
        .field("title", vec![required(), is_string(), max_length(100)])
        .field("description", vec![required(), is_string()])
        .field("start", vec![required(), datetime()])
        .field("end", vec![required(), datetime()])
        .field("teacher_id", vec![required(), numeric(), min_value(1.0)])
}

/// Ruleset for update payloads: same constraints, presence optional
pub fn update_rules() -> Ruleset {
    Ruleset::update()
        .field("title", vec![is_string(), max_length(100)])
        .field("description", vec![is_string()])
        .field("start", vec![datetime()])
        .field("end", vec![datetime()])
        .field("teacher_id", vec![numeric(), min_value(1.0)])
}
