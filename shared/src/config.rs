use crate::types::{
    AppConfig, AuthConfig, CatalogConfig, NotFoundStatus, Recipe, RecipeQrError, ServerConfig,
    StorageConfig,
};
use crate::utils::{image_file_name, is_safe_key};
use anyhow::Result;
use config::{Config, Environment, File};
use dotenvy::dotenv;
use std::collections::HashSet;
use std::env;
use std::path::Path;

pub fn load_config() -> Result<AppConfig> {
    // 加载 .env 文件
    dotenv().ok();

    load_config_from(Path::new("config"))
}

/// Layers `<dir>/default`, `<dir>/<ENV>` and `APP_*` environment variables,
/// in that order. Sections or fields none of them set keep their `Default`.
pub fn load_config_from(dir: &Path) -> Result<AppConfig> {
    let profile = env::var("ENV").unwrap_or_else(|_| "development".to_string());

    let settings = Config::builder()
        .add_source(File::from(dir.join("default")).required(false))
        .add_source(File::from(dir.join(profile)).required(false))
        // APP_SERVER__PORT=9000, APP_AUTH__API_KEYS=a,b,c
        .add_source(
            Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__")
                .list_separator(",")
                .with_list_parse_key("auth.api_keys")
                .try_parsing(true),
        )
        .build()?;

    let config: AppConfig = settings.try_deserialize()?;

    validate_config(&config)?;

    Ok(config)
}

pub fn validate_config(config: &AppConfig) -> Result<(), RecipeQrError> {
    if config.auth.api_keys.is_empty() {
        return Err(RecipeQrError::InvalidConfig(
            "at least one API key is required".to_string(),
        ));
    }

    if config.auth.api_keys.iter().any(|key| key.is_empty()) {
        return Err(RecipeQrError::InvalidConfig(
            "API keys cannot be empty".to_string(),
        ));
    }

    if config.auth.header_name.trim().is_empty() {
        return Err(RecipeQrError::InvalidConfig(
            "API key header name cannot be empty".to_string(),
        ));
    }

    if config.storage.base_dir.trim().is_empty() {
        return Err(RecipeQrError::InvalidConfig(
            "storage base_dir cannot be empty".to_string(),
        ));
    }

    if config.catalog.recipes.is_empty() {
        return Err(RecipeQrError::EmptyCatalog);
    }

    let mut seen = HashSet::new();
    for recipe in &config.catalog.recipes {
        if !is_safe_key(&recipe.name) {
            return Err(RecipeQrError::InvalidRecipeName(recipe.name.clone()));
        }
        // 不同名字可能映射到同一个图片文件
        if !seen.insert(image_file_name(&recipe.name)) {
            return Err(RecipeQrError::InvalidConfig(format!(
                "duplicate recipe name: {}",
                recipe.name
            )));
        }
    }

    Ok(())
}

pub fn default_recipes() -> Vec<Recipe> {
    vec![
        Recipe::new(
            "Spaghetti Carbonara",
            ["Spaghetti", "Eggs", "Parmesan", "Bacon", "Black Pepper"],
        ),
        Recipe::new(
            "Avocado Toast",
            ["Bread", "Avocado", "Lemon", "Salt", "Pepper"],
        ),
        Recipe::new(
            "Chocolate Mug Cake",
            ["Flour", "Cocoa Powder", "Sugar", "Egg", "Milk", "Butter"],
        ),
        Recipe::new(
            "Chicken Salad",
            ["Chicken Breast", "Lettuce", "Tomatoes", "Cucumber", "Olive Oil"],
        ),
    ]
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
        }
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            header_name: "x-api-key".to_string(),
            api_keys: vec![
                "TEAMKEY1".to_string(),
                "TEAMKEY2".to_string(),
                "TEAMKEY3".to_string(),
            ],
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            base_dir: "qr_codes".to_string(),
            not_found_status: NotFoundStatus::Ok,
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            recipes: default_recipes(),
        }
    }
}
