use crate::server::AppContext;
use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

pub fn health_routes() -> Router<AppContext> {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
}

#[derive(Debug, Serialize)]
pub struct RootResponse {
    pub message: &'static str,
    pub status: &'static str,
    pub ytdlp_available: bool,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub ytdlp_available: bool,
    pub message: &'static str,
    pub version: &'static str,
}

async fn root(State(ctx): State<AppContext>) -> Json<RootResponse> {
    let ytdlp_available = ctx.lookup.extractor().is_available().await;

    Json(RootResponse {
        message: "Video Downloader API is running",
        status: "healthy",
        ytdlp_available,
    })
}

async fn health(State(ctx): State<AppContext>) -> Json<HealthResponse> {
    let ytdlp_available = ctx.lookup.extractor().is_available().await;

    let (status, message) = if ytdlp_available {
        ("healthy", "All systems operational")
    } else {
        tracing::warn!("Health check: yt-dlp not available");
        ("degraded", "yt-dlp not available")
    };

    Json(HealthResponse {
        status,
        ytdlp_available,
        message,
        version: env!("CARGO_PKG_VERSION"),
    })
}
