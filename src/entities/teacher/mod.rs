//! Teacher resource module

pub mod handlers;
pub mod model;
pub mod transformer;

pub use handlers::*;
pub use model::{Teacher, TeacherDraft, TeacherPatch};
pub use transformer::{TeacherTransformer, TeacherView};
