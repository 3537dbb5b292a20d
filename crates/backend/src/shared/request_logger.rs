use axum::body::Body;
use axum::http::{header, Request};
use axum::middleware::Next;
use axum::response::Response;

/// One line per request: status, method, path, size and duration
pub async fn request_logger(req: Request<Body>, next: Next) -> Response {
    let start = std::time::Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let response = next.run(req).await;

    let size = response
        .headers()
        .get(header::CONTENT_LENGTH)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("-")
        .to_string();
    let status = response.status().as_u16();
    let elapsed_ms = start.elapsed().as_millis();

    if response.status().is_success() {
        tracing::info!("{} {:>6} {} | {:>5}ms | {:>10}", status, method.as_str(), path, elapsed_ms, size);
    } else {
        tracing::warn!("{} {:>6} {} | {:>5}ms | {:>10}", status, method.as_str(), path, elapsed_ms, size);
    }

    response
}
