//! Lesson → API view transformation

use super::model::Lesson;
use crate::core::time;
use crate::core::transform::{IncludeSet, Transformer};
use crate::entities::teacher::{Teacher, TeacherTransformer, TeacherView};
use chrono::NaiveDateTime;
use serde::Serialize;

/// API-facing representation of a lesson
#[derive(Debug, Clone, Serialize)]
pub struct LessonView {
    pub id: i64,
    pub title: String,
    pub description: String,
    #[serde(with = "time::wire")]
    pub start: NaiveDateTime,
    #[serde(with = "time::wire")]
    pub end: NaiveDateTime,
    /// Present only when the `teacher` include was requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub teacher: Option<Box<TeacherView>>,
}

pub struct LessonTransformer;

impl Transformer for LessonTransformer {
    type Entity = Lesson;
    type View = LessonView;

    fn available_includes() -> &'static [&'static str] {
        &["teacher"]
    }

    fn transform(lesson: &Lesson) -> LessonView {
        LessonView {
            id: lesson.id,
            title: lesson.title.clone(),
            description: lesson.description.clone(),
            start: lesson.start,
            end: lesson.end,
            teacher: None,
        }
    }
}

impl LessonTransformer {
    /// Transform with the owning teacher embedded when requested; the nested
    /// teacher view stays flat, bounding inclusion to one level
    pub fn transform_with_includes(
        lesson: &Lesson,
        teacher: &Teacher,
        includes: &IncludeSet,
    ) -> LessonView {
        let mut view = Self::transform(lesson);
        if Self::requested(includes, "teacher") {
            view.teacher = Some(Box::new(TeacherTransformer::transform(teacher)));
        }
        view
    }
}
