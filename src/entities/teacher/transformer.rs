//! Teacher → API view transformation

use super::model::Teacher;
use crate::core::transform::{IncludeSet, Transformer};
use crate::entities::lesson::{Lesson, LessonTransformer, LessonView};
use serde::Serialize;

/// API-facing representation of a teacher
#[derive(Debug, Clone, Serialize)]
pub struct TeacherView {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub funfact: String,
    pub age: i64,
    /// Present only when the `lessons` include was requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lessons: Option<Vec<LessonView>>,
}

pub struct TeacherTransformer;

impl Transformer for TeacherTransformer {
    type Entity = Teacher;
    type View = TeacherView;

    fn available_includes() -> &'static [&'static str] {
        &["lessons"]
    }

    fn transform(teacher: &Teacher) -> TeacherView {
        TeacherView {
            id: teacher.id,
            name: teacher.name.clone(),
            email: teacher.email.clone(),
            funfact: teacher.funfact.clone(),
            age: teacher.age,
            lessons: None,
        }
    }
}

impl TeacherTransformer {
    /// Transform with requested includes resolved against eagerly loaded
    /// relations; nested lesson views stay flat, bounding inclusion to one
    /// level
    pub fn transform_with_includes(
        teacher: &Teacher,
        lessons: &[Lesson],
        includes: &IncludeSet,
    ) -> TeacherView {
        let mut view = Self::transform(teacher);
        if Self::requested(includes, "lessons") {
            view.lessons = Some(lessons.iter().map(LessonTransformer::transform).collect());
        }
        view
    }
}
