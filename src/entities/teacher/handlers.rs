//! Teacher HTTP handlers
//!
//! Each handler follows the same shape: validate → persist/fetch →
//! transform → envelope. All failures surface as [`ApiError`].

use super::model::{self, TeacherDraft, TeacherPatch};
use super::transformer::{TeacherTransformer, TeacherView};
use crate::core::envelope::{Item, PageMeta, Paginated};
use crate::core::error::{ApiError, ApiResult};
use crate::core::query::{ListParams, ShowParams};
use crate::core::transform::Transformer;
use crate::server::AppState;
use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use serde_json::Value;

const RESOURCE: &str = "Teacher";

/// `GET /teachers?page=N`
pub async fn list_teachers(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> ApiResult<Json<Paginated<TeacherView>>> {
    let page = params.page();
    let (teachers, total) = state.teachers.paginate(page, state.page_size).await?;

    Ok(Json(Paginated {
        data: teachers.iter().map(TeacherTransformer::transform).collect(),
        pagination: PageMeta::new(page, state.page_size, total),
    }))
}

/// `POST /teachers`
pub async fn create_teacher(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> ApiResult<(StatusCode, Json<Item<TeacherView>>)> {
    model::create_rules()
        .validate(&payload)
        .map_err(ApiError::Validation)?;

    let draft: TeacherDraft =
        serde_json::from_value(payload).map_err(|e| ApiError::InvalidBody(e.to_string()))?;
    let teacher = state.teachers.create(draft).await?;
    tracing::info!(id = teacher.id, "teacher created");

    Ok((
        StatusCode::CREATED,
        Json(Item {
            data: TeacherTransformer::transform(&teacher),
        }),
    ))
}

/// `GET /teachers/{id}?include=lessons`
pub async fn show_teacher(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Query(params): Query<ShowParams>,
) -> ApiResult<Json<Item<TeacherView>>> {
    let includes = params.includes();

    let view = if TeacherTransformer::requested(&includes, "lessons") {
        let (teacher, lessons) = state
            .teachers
            .find_with_lessons(id)
            .await?
            .ok_or_else(|| ApiError::not_found(RESOURCE, id))?;
        TeacherTransformer::transform_with_includes(&teacher, &lessons, &includes)
    } else {
        let teacher = state
            .teachers
            .find(id)
            .await?
            .ok_or_else(|| ApiError::not_found(RESOURCE, id))?;
        TeacherTransformer::transform(&teacher)
    };

    Ok(Json(Item { data: view }))
}

/// `PUT`/`PATCH /teachers/{id}`
pub async fn update_teacher(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<Value>,
) -> ApiResult<Json<Item<TeacherView>>> {
    // Missing id wins over a bad payload, matching the original ordering
    if state.teachers.find(id).await?.is_none() {
        return Err(ApiError::not_found(RESOURCE, id));
    }

    model::update_rules()
        .validate(&payload)
        .map_err(ApiError::Validation)?;

    let patch: TeacherPatch =
        serde_json::from_value(payload).map_err(|e| ApiError::InvalidBody(e.to_string()))?;
    let teacher = state
        .teachers
        .update(id, patch)
        .await?
        .ok_or_else(|| ApiError::not_found(RESOURCE, id))?;

    Ok(Json(Item {
        data: TeacherTransformer::transform(&teacher),
    }))
}

/// `DELETE /teachers/{id}` — cascades to the teacher's lessons
pub async fn destroy_teacher(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<StatusCode> {
    if state.teachers.delete(id).await? {
        tracing::info!(id, "teacher deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::not_found(RESOURCE, id))
    }
}
