//! Lesson HTTP handlers
//!
//! Same orchestration as the teacher handlers, plus referential integrity:
//! a `teacher_id` that does not resolve surfaces as a validation-class
//! error via `StoreError::ForeignKey`.

use super::model::{self, LessonDraft, LessonPatch};
use super::transformer::{LessonTransformer, LessonView};
use crate::core::envelope::{Item, PageMeta, Paginated};
use crate::core::error::{ApiError, ApiResult};
use crate::core::query::{ListParams, ShowParams};
use crate::core::transform::Transformer;
use crate::server::AppState;
use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use serde_json::Value;

const RESOURCE: &str = "Lesson";

/// `GET /lessons?page=N`
pub async fn list_lessons(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> ApiResult<Json<Paginated<LessonView>>> {
    let page = params.page();
    let (lessons, total) = state.lessons.paginate(page, state.page_size).await?;

    Ok(Json(Paginated {
        data: lessons.iter().map(LessonTransformer::transform).collect(),
        pagination: PageMeta::new(page, state.page_size, total),
    }))
}

/// `POST /lessons`
pub async fn create_lesson(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> ApiResult<(StatusCode, Json<Item<LessonView>>)> {
    model::create_rules()
        .validate(&payload)
        .map_err(ApiError::Validation)?;

    let draft: LessonDraft =
        serde_json::from_value(payload).map_err(|e| ApiError::InvalidBody(e.to_string()))?;
    let lesson = state.lessons.create(draft).await?;
    tracing::info!(id = lesson.id, teacher_id = lesson.teacher_id, "lesson created");

    Ok((
        StatusCode::CREATED,
        Json(Item {
            data: LessonTransformer::transform(&lesson),
        }),
    ))
}

/// `GET /lessons/{id}?include=teacher`
pub async fn show_lesson(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Query(params): Query<ShowParams>,
) -> ApiResult<Json<Item<LessonView>>> {
    let includes = params.includes();

    let view = if LessonTransformer::requested(&includes, "teacher") {
        let (lesson, teacher) = state
            .lessons
            .find_with_teacher(id)
            .await?
            .ok_or_else(|| ApiError::not_found(RESOURCE, id))?;
        LessonTransformer::transform_with_includes(&lesson, &teacher, &includes)
    } else {
        let lesson = state
            .lessons
            .find(id)
            .await?
            .ok_or_else(|| ApiError::not_found(RESOURCE, id))?;
        LessonTransformer::transform(&lesson)
    };

    Ok(Json(Item { data: view }))
}

/// `PUT`/`PATCH /lessons/{id}`
pub async fn update_lesson(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<Value>,
) -> ApiResult<Json<Item<LessonView>>> {
    if state.lessons.find(id).await?.is_none() {
        return Err(ApiError::not_found(RESOURCE, id));
    }

    model::update_rules()
        .validate(&payload)
        .map_err(ApiError::Validation)?;

    let patch: LessonPatch =
        serde_json::from_value(payload).map_err(|e| ApiError::InvalidBody(e.to_string()))?;
    let lesson = state
        .lessons
        .update(id, patch)
        .await?
        .ok_or_else(|| ApiError::not_found(RESOURCE, id))?;

    Ok(Json(Item {
        data: LessonTransformer::transform(&lesson),
    }))
}

/// `DELETE /lessons/{id}`
pub async fn destroy_lesson(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<StatusCode> {
    if state.lessons.delete(id).await? {
        tracing::info!(id, "lesson deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::not_found(RESOURCE, id))
    }
}
