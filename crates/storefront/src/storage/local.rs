use crate::abstract_trait::storage::{FileStorageTrait, FileUpload};
use async_trait::async_trait;
use shared::{config::MediaConfig, errors::ServiceError};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{error, info};
use uuid::Uuid;

/// Writes uploads below `MEDIA_ROOT`; `MEDIA_URL` is the prefix they are
/// served under.
#[derive(Debug, Clone)]
pub struct LocalFileStorage {
    root: PathBuf,
    base_url: String,
}

impl LocalFileStorage {
    pub fn new(media: &MediaConfig) -> Self {
        Self {
            root: media.root.clone(),
            base_url: media.url.clone(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

/// Keeps a short alphanumeric extension from the client's file name.
fn extension_of(file_name: &str) -> Option<String> {
    let ext = Path::new(file_name).extension()?.to_str()?;
    if ext.is_empty() || ext.len() > 10 || !ext.chars().all(|c| c.is_ascii_alphanumeric()) {
        return None;
    }
    Some(ext.to_ascii_lowercase())
}

#[async_trait]
impl FileStorageTrait for LocalFileStorage {
    async fn store(&self, folder: &str, upload: &FileUpload) -> Result<String, ServiceError> {
        let dir = self.root.join(folder);
        fs::create_dir_all(&dir).await.map_err(|e| {
            error!("❌ Failed to create media folder {}: {e}", dir.display());
            ServiceError::from(e)
        })?;

        let name = match extension_of(&upload.file_name) {
            Some(ext) => format!("{}.{ext}", Uuid::new_v4()),
            None => Uuid::new_v4().to_string(),
        };

        let path = dir.join(&name);
        fs::write(&path, &upload.bytes).await.map_err(|e| {
            error!("❌ Failed to write {}: {e}", path.display());
            ServiceError::from(e)
        })?;

        info!(
            "💾 Stored {} ({} bytes) as {}",
            upload.file_name,
            upload.bytes.len(),
            path.display()
        );

        Ok(format!("{}{folder}/{name}", self.base_url))
    }
}
