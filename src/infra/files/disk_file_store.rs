use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use crate::domain::ports::FileStore;
use crate::error::AppError;

/// Stores uploads on the local disk under the configured root and returns
/// a root-relative reference path (forward slashes, suitable for serving
/// under the upload prefix).
pub struct DiskFileStore {
    root: PathBuf,
    prefix: String,
}

impl DiskFileStore {
    pub fn new(upload_dir: &str) -> Self {
        Self {
            root: PathBuf::from(upload_dir),
            prefix: upload_dir.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl FileStore for DiskFileStore {
    async fn save(&self, content: &[u8], original_name: &str) -> Result<String, AppError> {
        if content.is_empty() {
            return Err(AppError::Validation("Uploaded file is empty".into()));
        }

        tokio::fs::create_dir_all(&self.root)
            .await
            .map_err(|_| AppError::Internal)?;

        let extension = Path::new(original_name)
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| format!(".{}", e))
            .unwrap_or_default();
        let file_name = format!("{}{}", Uuid::new_v4(), extension);

        tokio::fs::write(self.root.join(&file_name), content)
            .await
            .map_err(|_| AppError::Internal)?;

        info!("Stored upload {} ({} bytes)", file_name, content.len());
        Ok(format!("{}/{}", self.prefix, file_name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store() -> (DiskFileStore, PathBuf) {
        let dir = std::env::temp_dir().join(format!("shop_uploads_{}", Uuid::new_v4()));
        let store = DiskFileStore::new(dir.to_str().unwrap());
        (store, dir)
    }

    #[tokio::test]
    async fn rejects_empty_content() {
        let (store, dir) = temp_store();
        let err = store.save(&[], "photo.png").await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        let _ = std::fs::remove_dir_all(dir);
    }

    #[tokio::test]
    async fn stored_file_is_byte_identical() {
        let (store, dir) = temp_store();
        let content = b"\x89PNG fake image bytes";

        let path = store.save(content, "photo.png").await.unwrap();
        assert!(path.ends_with(".png"));

        let file_name = path.rsplit('/').next().unwrap();
        let on_disk = std::fs::read(dir.join(file_name)).unwrap();
        assert_eq!(on_disk, content);

        let _ = std::fs::remove_dir_all(dir);
    }

    #[tokio::test]
    async fn names_do_not_collide() {
        let (store, dir) = temp_store();
        let a = store.save(b"a", "img.jpg").await.unwrap();
        let b = store.save(b"b", "img.jpg").await.unwrap();
        assert_ne!(a, b);
        let _ = std::fs::remove_dir_all(dir);
    }
}
