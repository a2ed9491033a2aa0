use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use tracing::{error, info, warn};
use std::time::Instant;
use crate::app_state::AppState;
use crate::error::ApiError;

pub async fn request_logging(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = req.method().clone();
    let uri = req.uri().clone();

    info!("Incoming request: {} {}", method, uri);

    let response = next.run(req).await;
    let status = response.status();
    let duration = start.elapsed();

    if status.is_success() {
        info!("Request completed: {} {} - {}ms", method, uri, duration.as_millis());
    } else if status.is_client_error() {
        warn!("Client error: {} {} - {} ({}ms)", method, uri, status, duration.as_millis());
    } else {
        error!("Server error: {} {} - {} ({}ms)", method, uri, status, duration.as_millis());
    }

    response
}

/// Rejects requests whose API key header is absent or not on the allow-list.
pub async fn require_api_key(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    // 非 UTF-8 的值按无效密钥处理
    let candidate = req
        .headers()
        .get(state.config.auth.header_name.as_str())
        .map(|h| h.to_str().unwrap_or_default());

    state.keys.check(candidate)?;

    Ok(next.run(req).await)
}
