// 二维码图片存储 - 每个菜谱名对应一个 PNG 文件
use recipe_qr_shared::{image_file_name, is_safe_key, RecipeQrError};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct ImageStore {
    base_dir: PathBuf,
}

impl ImageStore {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Create the base directory if it does not exist yet.
    pub async fn init(&self) -> Result<(), RecipeQrError> {
        fs::create_dir_all(&self.base_dir).await?;
        Ok(())
    }

    pub fn path_for(&self, recipe_name: &str) -> PathBuf {
        self.base_dir.join(image_file_name(recipe_name))
    }

    /// Replace the image for `recipe_name`. Readers see either the previous
    /// file or the new one, never a partial write.
    pub async fn save(&self, recipe_name: &str, png: &[u8]) -> Result<PathBuf, RecipeQrError> {
        if !is_safe_key(recipe_name) {
            return Err(RecipeQrError::InvalidRecipeName(recipe_name.to_string()));
        }

        let path = self.path_for(recipe_name);

        // Write atomically (write to temp, then rename)
        let temp_path = self
            .base_dir
            .join(format!(".{}.tmp", Uuid::new_v4()));
        let written = match fs::write(&temp_path, png).await {
            Ok(()) => fs::rename(&temp_path, &path).await,
            Err(e) => Err(e),
        };
        if let Err(e) = written {
            let _ = fs::remove_file(&temp_path).await;
            return Err(e.into());
        }

        debug!("Stored QR image {} ({} bytes)", path.display(), png.len());
        Ok(path)
    }

    /// `None` when no image was generated for `recipe_name`.
    pub async fn load(&self, recipe_name: &str) -> Result<Option<Vec<u8>>, RecipeQrError> {
        if !is_safe_key(recipe_name) {
            return Ok(None);
        }

        match fs::read(self.path_for(recipe_name)).await {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let store = ImageStore::new(dir.path());

        let path = store.save("Avocado Toast", b"first").await.unwrap();
        assert_eq!(path, dir.path().join("Avocado_Toast.png"));
        assert_eq!(store.load("Avocado Toast").await.unwrap(), Some(b"first".to_vec()));
        // 客户端已替换空格的名字映射到同一个文件
        assert_eq!(store.load("Avocado_Toast").await.unwrap(), Some(b"first".to_vec()));
    }

    #[tokio::test]
    async fn test_save_overwrites_and_leaves_one_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = ImageStore::new(dir.path());

        store.save("Chicken Salad", b"one").await.unwrap();
        store.save("Chicken Salad", b"two").await.unwrap();

        assert_eq!(store.load("Chicken Salad").await.unwrap(), Some(b"two".to_vec()));
        let entries: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }

    #[tokio::test]
    async fn test_load_missing() {
        let dir = tempfile::tempdir().unwrap();
        let store = ImageStore::new(dir.path());
        assert_eq!(store.load("Never Generated").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_unsafe_names() {
        let dir = tempfile::tempdir().unwrap();
        let store = ImageStore::new(dir.path().join("images"));
        store.init().await.unwrap();
        std::fs::write(dir.path().join("secret.png"), b"nope").unwrap();

        assert_eq!(store.load("../secret").await.unwrap(), None);
        assert!(matches!(
            store.save("../secret", b"x").await,
            Err(RecipeQrError::InvalidRecipeName(_))
        ));
    }

    #[tokio::test]
    async fn test_overlong_name_is_missing() {
        let dir = tempfile::tempdir().unwrap();
        let store = ImageStore::new(dir.path());
        let name = "a".repeat(300);

        assert_eq!(store.load(&name).await.unwrap(), None);
        assert!(matches!(
            store.save(&name, b"x").await,
            Err(RecipeQrError::InvalidRecipeName(_))
        ));
    }

    #[tokio::test]
    async fn test_failed_write_leaves_no_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        // 目录不存在时写入失败
        let store = ImageStore::new(dir.path().join("missing"));

        assert!(matches!(
            store.save("Avocado Toast", b"png").await,
            Err(RecipeQrError::Io(_))
        ));
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn test_failed_rename_removes_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = ImageStore::new(dir.path());
        // 目标路径是目录，rename 失败
        std::fs::create_dir(dir.path().join("Avocado_Toast.png")).unwrap();

        assert!(store.save("Avocado Toast", b"png").await.is_err());
        let names: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(names, vec![std::ffi::OsString::from("Avocado_Toast.png")]);
    }

    #[tokio::test]
    async fn test_init_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let store = ImageStore::new(dir.path().join("nested").join("qr_codes"));
        store.init().await.unwrap();
        store.init().await.unwrap();
        assert!(store.base_dir().is_dir());
    }
}
