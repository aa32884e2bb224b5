use bytes::Bytes;

use crate::application::ports::{BlobStore, BlobStoreError};
use crate::domain::BlobKey;

/// Blob store whose every call fails, for exercising storage outages.
pub struct UnavailableBlobStore;

#[async_trait::async_trait]
impl BlobStore for UnavailableBlobStore {
    async fn put(&self, key: &BlobKey, _data: Bytes) -> Result<String, BlobStoreError> {
        Err(BlobStoreError::UploadFailed(format!(
            "storage unavailable, cannot write {}",
            key
        )))
    }

    async fn fetch(&self, key: &BlobKey) -> Result<Bytes, BlobStoreError> {
        Err(BlobStoreError::NotFound(key.to_string()))
    }

    async fn exists(&self, _key: &BlobKey) -> Result<bool, BlobStoreError> {
        Ok(false)
    }

    fn url_for(&self, key: &BlobKey) -> String {
        format!("unavailable://{}", key)
    }
}
