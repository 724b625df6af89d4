//! # Academy API
//!
//! A REST API exposing two related resources — teachers and their lessons —
//! with pagination, nested-resource inclusion and field validation.
//!
//! ## Architecture
//!
//! - **Entity Store** ([`storage`]): per-entity store traits plus an
//!   in-memory backend with referential integrity and cascade deletes
//! - **Validator** ([`core::validation`]): declarative rulesets built from
//!   reusable field validators, with separate create/update modes
//! - **Transformer** ([`core::transform`] + per-entity transformers):
//!   entity → API view mapping with opt-in nested includes
//! - **Resource Handlers** ([`entities`]): axum handlers orchestrating
//!   validate → persist/fetch → transform → respond
//! - **Response Envelope** ([`core::envelope`], [`core::error`]): uniform
//!   item / collection / paginated / error shapes
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use academy::prelude::*;
//!
//! let store = InMemoryStore::new();
//! let state = AppState {
//!     teachers: Arc::new(store.clone()),
//!     lessons: Arc::new(store),
//!     page_size: 15,
//! };
//! academy::server::serve(state, "127.0.0.1:3000").await?;
//! ```

pub mod config;
pub mod core;
pub mod entities;
pub mod server;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        envelope::{Collection, Item, PageMeta, Paginated},
        error::{ApiError, ApiResult, FieldValidationError},
        query::{ListParams, ShowParams},
        transform::{IncludeSet, Transformer},
        validation::{Ruleset, validators},
    };

    // === Entities ===
    pub use crate::entities::{
        lesson::{Lesson, LessonDraft, LessonPatch, LessonTransformer, LessonView},
        teacher::{Teacher, TeacherDraft, TeacherPatch, TeacherTransformer, TeacherView},
    };

    // === Storage ===
    pub use crate::storage::{InMemoryStore, LessonStore, StoreError, TeacherStore};

    // === Config ===
    pub use crate::config::AppConfig;

    // === Server ===
    pub use crate::server::{AppState, build_router};

    // === External dependencies ===
    pub use anyhow::Result;
    pub use async_trait::async_trait;
    pub use chrono::{DateTime, NaiveDateTime, Utc};
    pub use serde::{Deserialize, Serialize};
    pub use std::sync::Arc;
}
