use axum::http::StatusCode;
use axum::Json;
use contracts::shared::logger::CreateLogRequest;

/// POST /api/logs
///
/// Client diagnostics end up in the host log next to the request lines.
pub async fn create(Json(req): Json<CreateLogRequest>) -> StatusCode {
    tracing::warn!(
        source = %req.source,
        category = %req.category,
        "{}",
        req.message
    );
    StatusCode::OK
}
