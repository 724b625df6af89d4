//! HTTP server: shared state, routing and the serve loop

pub mod router;

pub use router::build_router;

use crate::storage::{LessonStore, TeacherStore};
use anyhow::Result;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;

/// Shared application state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub teachers: Arc<dyn TeacherStore>,
    pub lessons: Arc<dyn LessonStore>,

    /// Items per list page
    pub page_size: usize,
}

/// Serve the API with graceful shutdown
///
/// Binds the address, serves requests and handles SIGTERM and Ctrl+C.
pub async fn serve(state: AppState, addr: &str) -> Result<()> {
    let app = build_router(state);
    let listener = TcpListener::bind(addr).await?;

    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C signal, initiating graceful shutdown...");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM signal, initiating graceful shutdown...");
        },
    }
}
