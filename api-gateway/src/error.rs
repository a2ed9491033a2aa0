use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use recipe_qr_shared::{
    ErrorDetail, NotFoundResponse, RecipeQrError, IMAGE_NOT_FOUND_MESSAGE, INVALID_KEY_DETAIL,
};
use tracing::{error, info, warn};

/// Maps domain errors onto HTTP responses
pub struct ApiError(RecipeQrError);

impl From<RecipeQrError> for ApiError {
    fn from(err: RecipeQrError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self.0 {
            err if err.is_unauthorized() => {
                warn!("Rejected request: {}", err);
                (
                    StatusCode::UNAUTHORIZED,
                    Json(ErrorDetail {
                        detail: INVALID_KEY_DETAIL.to_string(),
                    }),
                )
                    .into_response()
            }
            RecipeQrError::ImageNotFound(name) => {
                info!("No QR image stored for {:?}", name);
                (
                    StatusCode::NOT_FOUND,
                    Json(NotFoundResponse {
                        error: IMAGE_NOT_FOUND_MESSAGE.to_string(),
                    }),
                )
                    .into_response()
            }
            err => {
                error!("Request failed: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorDetail {
                        detail: "Internal Server Error".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}

/// Result type for API handlers
pub type ApiResult<T> = Result<T, ApiError>;
