//! Route table

use super::AppState;
use crate::entities::lesson::{
    create_lesson, destroy_lesson, list_lessons, show_lesson, update_lesson,
};
use crate::entities::teacher::{
    create_teacher, destroy_teacher, list_teachers, show_teacher, update_teacher,
};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{Value, json};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Build the full application router
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/teachers", get(list_teachers).post(create_teacher))
        .route(
            "/teachers/{id}",
            get(show_teacher)
                .put(update_teacher)
                .patch(update_teacher)
                .delete(destroy_teacher),
        )
        .route("/lessons", get(list_lessons).post(create_lesson))
        .route(
            "/lessons/{id}",
            get(show_lesson)
                .put(update_lesson)
                .patch(update_lesson)
                .delete(destroy_lesson),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Health check endpoint handler
async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "academy-api"
    }))
}
