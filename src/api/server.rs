// src/api/server.rs
//! HTTP front end: `POST /kdtree/ajax` answers nearest-neighbor requests,
//! everything else is served from the assets directory.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::{DefaultBodyLimit, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use tower_http::services::ServeDir;
use tracing::{info, warn};

use super::service::KdTreeService;
use crate::core::common::KdSearchError;
use crate::core::config::Config;

#[derive(Clone)]
struct AppState {
    service: Arc<KdTreeService>,
    timeout: Duration,
}

/// Failure of one request, rendered as `{"error": "..."}`.
#[derive(Debug)]
pub enum ApiError {
    Search(KdSearchError),
    Timeout(Duration),
    Worker(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::Search(e) if e.is_client_error() => (StatusCode::BAD_REQUEST, e.to_string()),
            Self::Search(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
            Self::Timeout(limit) => {
                (StatusCode::SERVICE_UNAVAILABLE, format!("request exceeded {} ms", limit.as_millis()))
            }
            Self::Worker(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };
        warn!(status = status.as_u16(), error = %message, "request failed");
        (status, Json(json!({ "error": message }))).into_response()
    }
}

impl From<KdSearchError> for ApiError {
    fn from(e: KdSearchError) -> Self {
        Self::Search(e)
    }
}

async fn nearest(State(state): State<AppState>, body: String) -> Result<Response, ApiError> {
    let service = Arc::clone(&state.service);
    let work = tokio::task::spawn_blocking(move || service.handle_json(&body));

    let answer = match tokio::time::timeout(state.timeout, work).await {
        Ok(Ok(answer)) => answer?,
        Ok(Err(join_error)) => return Err(ApiError::Worker(join_error.to_string())),
        Err(_) => return Err(ApiError::Timeout(state.timeout)),
    };

    Ok(([(header::CONTENT_TYPE, "application/json")], answer).into_response())
}

async fn health() -> &'static str {
    "OK"
}

/// Builds the application router.
///
/// Each `/kdtree/ajax` request runs on the blocking pool under the
/// `request_timeout_ms` deadline. The deadline only bounds the response: a
/// request that times out answers 503, but its build and search keep running
/// on the blocking thread until they finish.
pub fn router(service: Arc<KdTreeService>, config: &Config) -> Router {
    let state = AppState { service, timeout: Duration::from_millis(config.request_timeout_ms) };

    Router::new()
        .route("/kdtree/ajax", post(nearest))
        .route("/health", get(health))
        .fallback_service(ServeDir::new(&config.assets_dir))
        .layer(DefaultBodyLimit::max(config.max_request_bytes))
        .with_state(state)
}

/// Binds `config.listen_addr` and serves until the process is stopped.
///
/// # Errors
///
/// `KdSearchError::Configuration` for a bad address, `KdSearchError::Io` if
/// binding or serving fails.
pub async fn serve(config: &Config, service: Arc<KdTreeService>) -> Result<(), KdSearchError> {
    let addr = config.socket_addr()?;
    let app = router(service, config);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, assets = %config.assets_dir.display(), "kd-tree server listening");
    axum::serve(listener, app).await?;
    Ok(())
}
