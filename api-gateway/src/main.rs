use anyhow::Result;
use axum::{
    middleware::{from_fn, from_fn_with_state},
    Router,
};
use recipe_qr_shared::load_config;
use tower::ServiceBuilder;
use tower_http::{
    cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod app_state;
mod auth;
mod catalog;
mod error;
mod handlers;
mod middleware;
mod qr;
mod storage;

use app_state::AppState;
use handlers::{auth::auth_routes, health::health_routes, recipes::recipe_routes};
use middleware::{request_logging, require_api_key};

#[tokio::main]
async fn main() -> Result<()> {
    // 初始化日志
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    // 加载配置
    let config = load_config()?;
    info!("Configuration loaded successfully");

    let app_state = AppState::new(config)?;
    app_state.store.init().await?;
    info!(
        "Serving {} recipes, storing QR codes in {}",
        app_state.catalog.recipes().len(),
        app_state.store.base_dir().display()
    );

    let addr = format!(
        "{}:{}",
        app_state.config.server.host, app_state.config.server.port
    );
    let app = create_app(app_state);

    // 启动服务器
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Recipe QR API listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}

fn create_app(app_state: AppState) -> Router {
    // Any origin with credentials: mirror the request instead of sending `*`
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true);

    let middleware_layer = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(from_fn(request_logging))
        .into_inner();

    // 需要 API Key 的路由
    let protected = recipe_routes()
        .merge(auth_routes())
        .route_layer(from_fn_with_state(app_state.clone(), require_api_key));

    Router::new()
        .merge(health_routes())
        .merge(protected)
        .layer(middleware_layer)
        .with_state(app_state)
}
