use axum::http::{header, Method};
use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};

use crate::handlers;
use crate::shared::request_logger::request_logger;
use crate::shared::state::AppState;

/// All routes of the host
pub fn configure_routes(state: AppState) -> Router {
    // Client-side routes such as /classify get index.html
    let index = state.dist_dir.join("index.html");
    let spa = ServeDir::new(&state.dist_dir).fallback(ServeFile::new(index));

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/api/config", get(handlers::config::get_client_config))
        .route("/api/logs", post(handlers::logs::create))
        .fallback_service(spa)
        .layer(middleware::from_fn(request_logger))
        .layer(cors)
        .with_state(state)
}
