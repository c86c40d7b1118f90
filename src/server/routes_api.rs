use crate::lookup::LookupError;
use crate::server::error::AppError;
use crate::server::request_id::RequestId;
use crate::server::AppContext;
use axum::{
    extract::{rejection::JsonRejection, State},
    routing::post,
    Extension, Json, Router,
};
use serde::Deserialize;
use vidinfo_common::VideoInfo;

pub fn api_routes() -> Router<AppContext> {
    Router::new().route("/download", post(download))
}

#[derive(Debug, Deserialize)]
pub struct DownloadRequest {
    #[serde(default)]
    pub url: Option<String>,
}

async fn download(
    State(ctx): State<AppContext>,
    request_id: Option<Extension<RequestId>>,
    body: Result<Json<DownloadRequest>, JsonRejection>,
) -> Result<Json<VideoInfo>, AppError> {
    let request_id = request_id.map(|Extension(RequestId(id))| id);

    let Json(request) = body.map_err(|rejection| {
        tracing::warn!(error = %rejection.body_text(), "Rejected download request body");
        AppError::new(LookupError::Validation(format!(
            "Invalid request body: {}",
            rejection.body_text()
        )))
        .with_request_id(request_id.clone())
    })?;

    let url = request.url.unwrap_or_default();

    ctx.lookup
        .lookup(&url)
        .await
        .map(Json)
        .map_err(|e| AppError::from(e).with_request_id(request_id))
}
