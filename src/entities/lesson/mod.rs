//! Lesson resource module

pub mod handlers;
pub mod model;
pub mod transformer;

pub use handlers::*;
pub use model::{Lesson, LessonDraft, LessonPatch};
pub use transformer::{LessonTransformer, LessonView};
