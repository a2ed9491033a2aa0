use axum::{response::Json, routing::get, Router};
use recipe_qr_shared::{KeyStatusResponse, KEY_VALID_STATUS};
use crate::app_state::AppState;

/// Only reached once `require_api_key` has accepted the request.
pub async fn check_key() -> Json<KeyStatusResponse> {
    Json(KeyStatusResponse {
        status: KEY_VALID_STATUS.to_string(),
    })
}

pub fn auth_routes() -> Router<AppState> {
    Router::new().route("/check_key", get(check_key))
}
