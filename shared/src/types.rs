use serde::{Deserialize, Serialize};

// 菜谱
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Recipe {
    pub name: String,
    pub ingredients: Vec<String>,
}

impl Recipe {
    pub fn new<I, S>(name: impl Into<String>, ingredients: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            ingredients: ingredients.into_iter().map(Into::into).collect(),
        }
    }
}

// API 响应类型
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RootResponse {
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeQrResponse {
    pub recipe_name: String,
    pub ingredients: Vec<String>,
    pub qr_code_base64: String,
    pub qr_code_file: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeyStatusResponse {
    pub status: String,
}

/// Body of every 4xx/5xx response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub detail: String,
}

/// Body returned when a QR image has not been generated yet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotFoundResponse {
    pub error: String,
}

pub const WELCOME_MESSAGE: &str =
    "Welcome to the Recipe QR Generator API! Use /docs to explore endpoints.";
pub const KEY_VALID_STATUS: &str = "API Key is valid";
pub const INVALID_KEY_DETAIL: &str = "Invalid API Key";
pub const IMAGE_NOT_FOUND_MESSAGE: &str = "QR code not found. Generate recipe first.";

// 错误类型
#[derive(Debug, thiserror::Error)]
pub enum RecipeQrError {
    #[error("Missing API key")]
    MissingApiKey,

    #[error("Invalid API key")]
    InvalidApiKey,

    #[error("QR image not found: {0}")]
    ImageNotFound(String),

    #[error("Recipe name cannot be used as a file name: {0:?}")]
    InvalidRecipeName(String),

    #[error("QR encoding error: {0}")]
    Encoding(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Recipe catalog is empty")]
    EmptyCatalog,

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl RecipeQrError {
    /// Both credential failures collapse into a single 401 on the wire.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::MissingApiKey | Self::InvalidApiKey)
    }
}

// 配置相关类型
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub auth: AuthConfig,
    pub storage: StorageConfig,
    pub catalog: CatalogConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    pub header_name: String,
    pub api_keys: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub base_dir: String,
    pub not_found_status: NotFoundStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub recipes: Vec<Recipe>,
}

/// HTTP status used when a requested QR image does not exist.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum NotFoundStatus {
    /// 200 with an error-shaped body, as existing clients expect.
    #[default]
    Ok,
    NotFound,
}
