//! Entity store traits and backends
//!
//! Each entity type has its own store trait covering the capability set
//! {create, find, update, delete, paginate} plus eager-load variants for
//! nested inclusion. Handlers depend only on the traits; the backend is
//! swappable.

pub mod memory;

pub use memory::InMemoryStore;

use crate::entities::lesson::{Lesson, LessonDraft, LessonPatch};
use crate::entities::teacher::{Teacher, TeacherDraft, TeacherPatch};
use async_trait::async_trait;
use std::fmt;

/// Errors raised by storage backends
#[derive(Debug)]
pub enum StoreError {
    /// A foreign key does not resolve to a persisted entity
    ForeignKey { field: &'static str, value: i64 },

    /// The backing store is unusable for this request
    LockPoisoned,
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::ForeignKey { field, value } => {
                write!(
                    f,
                    "'{}' does not reference an existing record (value: {})",
                    field, value
                )
            }
            StoreError::LockPoisoned => write!(f, "store lock poisoned"),
        }
    }
}

impl std::error::Error for StoreError {}

/// Store contract for teachers
///
/// `find`-style operations signal a missing id with `Ok(None)`; `Err` is
/// reserved for backend failures.
#[async_trait]
pub trait TeacherStore: Send + Sync {
    async fn create(&self, draft: TeacherDraft) -> Result<Teacher, StoreError>;

    async fn find(&self, id: i64) -> Result<Option<Teacher>, StoreError>;

    /// Fetch a teacher with its lessons eagerly loaded, in store order
    async fn find_with_lessons(&self, id: i64)
    -> Result<Option<(Teacher, Vec<Lesson>)>, StoreError>;

    async fn update(&self, id: i64, patch: TeacherPatch) -> Result<Option<Teacher>, StoreError>;

    /// Delete a teacher and cascade-delete its lessons atomically
    ///
    /// Returns `false` if no teacher had this id.
    async fn delete(&self, id: i64) -> Result<bool, StoreError>;

    /// Fetch one page of teachers in id order, with the total count
    async fn paginate(&self, page: usize, per_page: usize)
    -> Result<(Vec<Teacher>, usize), StoreError>;
}

/// Store contract for lessons
///
/// Create and update enforce referential integrity: a `teacher_id` that
/// does not resolve yields [`StoreError::ForeignKey`].
#[async_trait]
pub trait LessonStore: Send + Sync {
    async fn create(&self, draft: LessonDraft) -> Result<Lesson, StoreError>;

    async fn find(&self, id: i64) -> Result<Option<Lesson>, StoreError>;

    /// Fetch a lesson with its owning teacher eagerly loaded
    async fn find_with_teacher(&self, id: i64) -> Result<Option<(Lesson, Teacher)>, StoreError>;

    async fn update(&self, id: i64, patch: LessonPatch) -> Result<Option<Lesson>, StoreError>;

    /// Returns `false` if no lesson had this id.
    async fn delete(&self, id: i64) -> Result<bool, StoreError>;

    /// Fetch one page of lessons in id order, with the total count
    async fn paginate(&self, page: usize, per_page: usize)
    -> Result<(Vec<Lesson>, usize), StoreError>;
}
