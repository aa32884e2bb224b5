use bytes::Bytes;

use crate::domain::BlobKey;

/// Object storage holding the uploaded audio files.
#[async_trait::async_trait]
pub trait BlobStore: Send + Sync {
    /// Writes `data` under `key`, replacing any existing object, and returns
    /// the URL the object is reachable at.
    async fn put(&self, key: &BlobKey, data: Bytes) -> Result<String, BlobStoreError>;

    async fn fetch(&self, key: &BlobKey) -> Result<Bytes, BlobStoreError>;

    async fn exists(&self, key: &BlobKey) -> Result<bool, BlobStoreError>;

    fn url_for(&self, key: &BlobKey) -> String;
}

#[derive(Debug, thiserror::Error)]
pub enum BlobStoreError {
    #[error("invalid storage configuration: {0}")]
    Configuration(String),
    #[error("upload failed: {0}")]
    UploadFailed(String),
    #[error("object not found: {0}")]
    NotFound(String),
    #[error("download failed: {0}")]
    DownloadFailed(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
