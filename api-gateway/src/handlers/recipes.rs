use axum::{
    extract::{Path, State},
    http::header::CONTENT_TYPE,
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use recipe_qr_shared::{
    recipe_text, NotFoundResponse, NotFoundStatus, RecipeQrError, RecipeQrResponse,
    IMAGE_NOT_FOUND_MESSAGE,
};
use tracing::info;
use crate::app_state::AppState;
use crate::error::ApiResult;

// 随机挑选菜谱并生成二维码
pub async fn generate_recipe_qr(
    State(state): State<AppState>,
) -> ApiResult<Json<RecipeQrResponse>> {
    let recipe = state.catalog.pick_random().clone();
    let png = state.qr.encode(&recipe_text(&recipe))?;

    let path = state.store.save(&recipe.name, &png).await?;
    info!("Generated QR code for {} at {}", recipe.name, path.display());

    Ok(Json(RecipeQrResponse {
        recipe_name: recipe.name,
        ingredients: recipe.ingredients,
        qr_code_base64: STANDARD.encode(&png),
        qr_code_file: path.display().to_string(),
    }))
}

// 读取已生成的二维码图片
pub async fn get_qr_image(
    State(state): State<AppState>,
    Path(recipe_name): Path<String>,
) -> ApiResult<Response> {
    match state.store.load(&recipe_name).await? {
        Some(png) => Ok(([(CONTENT_TYPE, "image/png")], png).into_response()),
        None => match state.config.storage.not_found_status {
            NotFoundStatus::Ok => Ok(Json(NotFoundResponse {
                error: IMAGE_NOT_FOUND_MESSAGE.to_string(),
            })
            .into_response()),
            NotFoundStatus::NotFound => Err(RecipeQrError::ImageNotFound(recipe_name).into()),
        },
    }
}

pub fn recipe_routes() -> Router<AppState> {
    Router::new()
        .route("/recipe_qr", get(generate_recipe_qr))
        .route("/recipe_qr_image/:recipe_name", get(get_qr_image))
}
