use async_trait::async_trait;
use axum::body::Bytes;
use shared::errors::ServiceError;
use std::sync::Arc;

pub type DynFileStorage = Arc<dyn FileStorageTrait + Send + Sync>;

/// A file received in a multipart form.
#[derive(Debug, Clone)]
pub struct FileUpload {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Bytes,
}

#[async_trait]
pub trait FileStorageTrait {
    /// Persists the upload under `folder` and returns the public URL it is
    /// served from.
    async fn store(&self, folder: &str, upload: &FileUpload) -> Result<String, ServiceError>;
}
