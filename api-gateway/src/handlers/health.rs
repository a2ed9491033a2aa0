use axum::{extract::State, response::Json, routing::get, Router};
use recipe_qr_shared::{now_utc, RootResponse, WELCOME_MESSAGE};
use serde_json::{json, Value};
use crate::app_state::AppState;

pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: WELCOME_MESSAGE.to_string(),
    })
}

pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "timestamp": now_utc().timestamp(),
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Endpoint overview the welcome message points clients to.
pub async fn docs(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "title": "Recipe QR Generator API",
        "version": env!("CARGO_PKG_VERSION"),
        "auth": {
            "header": state.config.auth.header_name,
            "unauthorized": { "status": 401, "body": { "detail": "Invalid API Key" } }
        },
        "endpoints": [
            {
                "method": "GET",
                "path": "/",
                "auth": false,
                "description": "Welcome message"
            },
            {
                "method": "GET",
                "path": "/recipe_qr",
                "auth": true,
                "description": "Pick a random recipe, store its QR code and return it as Base64"
            },
            {
                "method": "GET",
                "path": "/recipe_qr_image/{recipe_name}",
                "auth": true,
                "description": "Return the stored QR code PNG for a recipe"
            },
            {
                "method": "GET",
                "path": "/check_key",
                "auth": true,
                "description": "Check whether an API key is valid"
            },
            {
                "method": "GET",
                "path": "/health",
                "auth": false,
                "description": "Service health"
            }
        ]
    }))
}

pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .route("/docs", get(docs))
}
