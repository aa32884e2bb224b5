use std::sync::Arc;

use bytes::Bytes;
use object_store::path::Path as StorePath;
use object_store::{ObjectStore, PutPayload};
use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

use crate::application::ports::{BlobStore, BlobStoreError};
use crate::domain::BlobKey;

/// Characters escaped when a stored path is placed in a URL. `/` is kept as
/// the segment delimiter; `%` is escaped because `object_store` itself
/// percent-encodes reserved characters into the stored name.
const URL_PATH: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'[')
    .add(b'\\')
    .add(b']')
    .add(b'^')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// [`BlobStore`] backed by any `object_store` implementation.
///
/// Backend-specific constructors live next to their configuration:
/// [`ObjectBlobStore::azure`], [`ObjectBlobStore::local`] and
/// [`ObjectBlobStore::in_memory`].
pub struct ObjectBlobStore {
    inner: Arc<dyn ObjectStore>,
    base_url: String,
}

impl ObjectBlobStore {
    pub fn new(inner: Arc<dyn ObjectStore>, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { inner, base_url }
    }
}

#[async_trait::async_trait]
impl BlobStore for ObjectBlobStore {
    #[tracing::instrument(skip(self, data), fields(key = %key, bytes = data.len()))]
    async fn put(&self, key: &BlobKey, data: Bytes) -> Result<String, BlobStoreError> {
        let store_path = StorePath::from(key.as_str());
        self.inner
            .put(&store_path, PutPayload::from(data))
            .await
            .map_err(|e| BlobStoreError::UploadFailed(e.to_string()))?;

        Ok(self.url_for(key))
    }

    async fn fetch(&self, key: &BlobKey) -> Result<Bytes, BlobStoreError> {
        let store_path = StorePath::from(key.as_str());
        let result = self.inner.get(&store_path).await.map_err(|e| match e {
            err @ object_store::Error::NotFound { .. } => {
                BlobStoreError::NotFound(err.to_string())
            }
            other => BlobStoreError::DownloadFailed(other.to_string()),
        })?;

        result
            .bytes()
            .await
            .map_err(|e| BlobStoreError::DownloadFailed(e.to_string()))
    }

    async fn exists(&self, key: &BlobKey) -> Result<bool, BlobStoreError> {
        let store_path = StorePath::from(key.as_str());
        match self.inner.head(&store_path).await {
            Ok(_) => Ok(true),
            Err(object_store::Error::NotFound { .. }) => Ok(false),
            Err(e) => Err(BlobStoreError::DownloadFailed(e.to_string())),
        }
    }

    /// URL of the object as stored, which may differ from the raw key when
    /// the filename carries reserved characters.
    fn url_for(&self, key: &BlobKey) -> String {
        let stored_name = StorePath::from(key.as_str()).to_string();
        format!(
            "{}/{}",
            self.base_url,
            utf8_percent_encode(&stored_name, URL_PATH)
        )
    }
}
