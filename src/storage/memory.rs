//! In-memory store backend
//!
//! Entity tables are `IndexMap`s keyed by id; ids are assigned from
//! monotonically increasing sequences, so insertion order and id order
//! coincide and pagination walks them directly. All state sits behind one
//! `RwLock`, so a mutation holds a single write guard for its whole scope —
//! the teacher cascade delete removes the teacher row and every owned
//! lesson under that one guard, or nothing at all.

use super::{LessonStore, StoreError, TeacherStore};
use crate::core::time::parse_datetime;
use crate::entities::lesson::{Lesson, LessonDraft, LessonPatch};
use crate::entities::teacher::{Teacher, TeacherDraft, TeacherPatch};
use async_trait::async_trait;
use indexmap::IndexMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

struct Inner {
    teachers: IndexMap<i64, Teacher>,
    lessons: IndexMap<i64, Lesson>,
    next_teacher_id: i64,
    next_lesson_id: i64,
}

/// Thread-safe in-memory store for teachers and lessons
#[derive(Clone)]
pub struct InMemoryStore {
    inner: Arc<RwLock<Inner>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(Inner {
                teachers: IndexMap::new(),
                lessons: IndexMap::new(),
                next_teacher_id: 1,
                next_lesson_id: 1,
            })),
        }
    }

    /// A store pre-populated with demo data, mirroring the seed set the
    /// original deployment shipped with
    pub fn seeded() -> Self {
        let store = Self::new();
        {
            let mut inner = store.inner.write().expect("fresh store lock");

            let teachers = [
                ("Ana Silva", "ana@academy.test", "Speaks four languages", 34),
                ("Bram Visser", "bram@academy.test", "Former chess champion", 41),
                ("Carla Mendes", "carla@academy.test", "Collects vinyl records", 29),
            ];
            for (name, email, funfact, age) in teachers {
                let id = inner.next_teacher_id;
                inner.next_teacher_id += 1;
                inner.teachers.insert(
                    id,
                    Teacher::from_draft(
                        id,
                        TeacherDraft {
                            name: name.to_string(),
                            email: email.to_string(),
                            funfact: funfact.to_string(),
                            age,
                        },
                    ),
                );
            }

            let lessons = [
                ("Intro to Algebra", "Variables and equations", "2024-01-08 09:00:00", "2024-01-08 10:30:00", 1),
                ("Algebra II", "Polynomials", "2024-01-15 09:00:00", "2024-01-15 10:30:00", 1),
                ("Openings", "Common chess openings", "2024-01-09 14:00:00", "2024-01-09 15:00:00", 2),
                ("Music History", "From wax to vinyl", "2024-01-10 11:00:00", "2024-01-10 12:00:00", 3),
            ];
            for (title, description, start, end, teacher_id) in lessons {
                let id = inner.next_lesson_id;
                inner.next_lesson_id += 1;
                inner.lessons.insert(
                    id,
                    Lesson::from_draft(
                        id,
                        LessonDraft {
                            title: title.to_string(),
                            description: description.to_string(),
                            start: parse_datetime(start).expect("seed datetime"),
                            end: parse_datetime(end).expect("seed datetime"),
                            teacher_id,
                        },
                    ),
                );
            }
        }
        store
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Inner>, StoreError> {
        self.inner.read().map_err(|_| StoreError::LockPoisoned)
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Inner>, StoreError> {
        self.inner.write().map_err(|_| StoreError::LockPoisoned)
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

fn page_of<T: Clone>(table: &IndexMap<i64, T>, page: usize, per_page: usize) -> (Vec<T>, usize) {
    let total = table.len();
    // Saturating offset: the page number is caller-controlled input
    let items = table
        .values()
        .skip(page.saturating_sub(1).saturating_mul(per_page))
        .take(per_page)
        .cloned()
        .collect();
    (items, total)
}

#[async_trait]
impl TeacherStore for InMemoryStore {
    async fn create(&self, draft: TeacherDraft) -> Result<Teacher, StoreError> {
        let mut inner = self.write()?;
        let id = inner.next_teacher_id;
        inner.next_teacher_id += 1;
        let teacher = Teacher::from_draft(id, draft);
        inner.teachers.insert(id, teacher.clone());
        Ok(teacher)
    }

    async fn find(&self, id: i64) -> Result<Option<Teacher>, StoreError> {
        Ok(self.read()?.teachers.get(&id).cloned())
    }

    async fn find_with_lessons(
        &self,
        id: i64,
    ) -> Result<Option<(Teacher, Vec<Lesson>)>, StoreError> {
        let inner = self.read()?;
        Ok(inner.teachers.get(&id).map(|teacher| {
            let lessons = inner
                .lessons
                .values()
                .filter(|lesson| lesson.teacher_id == id)
                .cloned()
                .collect();
            (teacher.clone(), lessons)
        }))
    }

    async fn update(&self, id: i64, patch: TeacherPatch) -> Result<Option<Teacher>, StoreError> {
        let mut inner = self.write()?;
        Ok(inner.teachers.get_mut(&id).map(|teacher| {
            teacher.apply(patch);
            teacher.clone()
        }))
    }

    async fn delete(&self, id: i64) -> Result<bool, StoreError> {
        let mut inner = self.write()?;
        // shift_remove keeps the remaining rows in id order
        if inner.teachers.shift_remove(&id).is_none() {
            return Ok(false);
        }
        inner.lessons.retain(|_, lesson| lesson.teacher_id != id);
        Ok(true)
    }

    async fn paginate(
        &self,
        page: usize,
        per_page: usize,
    ) -> Result<(Vec<Teacher>, usize), StoreError> {
        Ok(page_of(&self.read()?.teachers, page, per_page))
    }
}

#[async_trait]
impl LessonStore for InMemoryStore {
    async fn create(&self, draft: LessonDraft) -> Result<Lesson, StoreError> {
        let mut inner = self.write()?;
        if !inner.teachers.contains_key(&draft.teacher_id) {
            return Err(StoreError::ForeignKey {
                field: "teacher_id",
                value: draft.teacher_id,
            });
        }
        let id = inner.next_lesson_id;
        inner.next_lesson_id += 1;
        let lesson = Lesson::from_draft(id, draft);
        inner.lessons.insert(id, lesson.clone());
        Ok(lesson)
    }

    async fn find(&self, id: i64) -> Result<Option<Lesson>, StoreError> {
        Ok(self.read()?.lessons.get(&id).cloned())
    }

    async fn find_with_teacher(&self, id: i64) -> Result<Option<(Lesson, Teacher)>, StoreError> {
        let inner = self.read()?;
        Ok(inner.lessons.get(&id).and_then(|lesson| {
            inner
                .teachers
                .get(&lesson.teacher_id)
                .map(|teacher| (lesson.clone(), teacher.clone()))
        }))
    }

    async fn update(&self, id: i64, patch: LessonPatch) -> Result<Option<Lesson>, StoreError> {
        let mut inner = self.write()?;
        if let Some(teacher_id) = patch.teacher_id {
            if !inner.teachers.contains_key(&teacher_id) {
                return Err(StoreError::ForeignKey {
                    field: "teacher_id",
                    value: teacher_id,
                });
            }
        }
        Ok(inner.lessons.get_mut(&id).map(|lesson| {
            lesson.apply(patch);
            lesson.clone()
        }))
    }

    async fn delete(&self, id: i64) -> Result<bool, StoreError> {
        Ok(self.write()?.lessons.shift_remove(&id).is_some())
    }

    async fn paginate(
        &self,
        page: usize,
        per_page: usize,
    ) -> Result<(Vec<Lesson>, usize), StoreError> {
        Ok(page_of(&self.read()?.lessons, page, per_page))
    }
}
