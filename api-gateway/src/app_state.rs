use crate::auth::KeyValidator;
use crate::catalog::RecipeCatalog;
use crate::qr::QrGenerator;
use crate::storage::ImageStore;
use recipe_qr_shared::{AppConfig, RecipeQrError};
use std::sync::Arc;

/// 应用程序状态
#[derive(Clone)]
pub struct AppState {
    /// 服务配置
    pub config: Arc<AppConfig>,
    pub keys: Arc<KeyValidator>,
    pub catalog: Arc<RecipeCatalog>,
    pub qr: QrGenerator,
    pub store: Arc<ImageStore>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Result<Self, RecipeQrError> {
        let keys = KeyValidator::new(config.auth.api_keys.iter().cloned());
        let catalog = RecipeCatalog::new(config.catalog.recipes.clone())?;
        let store = ImageStore::new(&config.storage.base_dir);

        Ok(Self {
            config: Arc::new(config),
            keys: Arc::new(keys),
            catalog: Arc::new(catalog),
            qr: QrGenerator::new(),
            store: Arc::new(store),
        })
    }
}
