use std::path::PathBuf;
use std::sync::Arc;

use bytes::Bytes;

use crate::application::ports::{
    AudioNormalizer, AudioNormalizerError, BlobStore, BlobStoreError, RepositoryError,
    TranscriptionRepository,
};
use crate::domain::{AudioUpload, BlobKey, TranscriptionRecord, UploadId};

/// Stores an uploaded audio file and records its transcript.
///
/// The blob is written before the record is inserted and nothing is rolled
/// back: a failed insert leaves the blob in place without a record.
pub struct UploadService {
    blob_store: Arc<dyn BlobStore>,
    repository: Arc<dyn TranscriptionRepository>,
    normalizer: Option<Arc<dyn AudioNormalizer>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadReceipt {
    pub upload_id: UploadId,
    pub key: BlobKey,
    pub url: String,
    pub transcript: String,
}

impl UploadService {
    pub fn new(
        blob_store: Arc<dyn BlobStore>,
        repository: Arc<dyn TranscriptionRepository>,
        normalizer: Option<Arc<dyn AudioNormalizer>>,
    ) -> Self {
        Self {
            blob_store,
            repository,
            normalizer,
        }
    }

    #[tracing::instrument(
        skip(self, audio, transcript),
        fields(filename = %audio.filename, bytes = audio.data.len())
    )]
    pub async fn upload(
        &self,
        audio: AudioUpload,
        transcript: String,
    ) -> Result<UploadReceipt, UploadError> {
        let (filename, data, scratch) = self.prepare(audio).await?;

        let upload_id = UploadId::new();
        let key = BlobKey::new(&upload_id, &filename);

        let stored = self.blob_store.put(&key, data).await;
        if let Some(path) = scratch {
            discard_scratch(path).await;
        }
        let url = stored.map_err(|e| {
            tracing::error!(error = %e, key = %key, "Blob upload failed");
            UploadError::Storage(e)
        })?;

        tracing::debug!(key = %key, url = %url, "Audio stored");

        let record = TranscriptionRecord::new(url.clone(), transcript.clone());
        if let Err(e) = self.repository.insert(&record).await {
            tracing::warn!(
                error = %e,
                key = %key,
                "Record insert failed, stored audio left without a transcription record"
            );
            return Err(UploadError::Repository(e));
        }

        tracing::info!(
            upload_id = %upload_id.as_uuid(),
            key = %key,
            "Audio upload recorded"
        );

        Ok(UploadReceipt {
            upload_id,
            key,
            url,
            transcript,
        })
    }

    async fn prepare(
        &self,
        audio: AudioUpload,
    ) -> Result<(String, Bytes, Option<PathBuf>), UploadError> {
        let normalizer = match &self.normalizer {
            Some(n) if !audio.is_canonical() => Arc::clone(n),
            _ => return Ok((audio.filename, audio.data, None)),
        };

        let AudioUpload { filename, data } = audio;
        let normalized = tokio::task::spawn_blocking(move || normalizer.normalize(&data, &filename))
            .await
            .map_err(|e| {
                AudioNormalizerError::EncodingFailed(format!("normalizer task failed: {}", e))
            })?
            .map_err(|e| {
                tracing::error!(error = %e, "Audio normalization failed");
                UploadError::Normalization(e)
            })?;

        tracing::debug!(
            filename = %normalized.filename,
            sample_rate = normalized.sample_rate,
            channels = normalized.channels,
            bytes = normalized.data.len(),
            "Audio normalized"
        );

        Ok((normalized.filename, normalized.data, Some(normalized.path)))
    }
}

async fn discard_scratch(path: PathBuf) {
    if let Err(e) = tokio::fs::remove_file(&path).await {
        tracing::warn!(error = %e, path = %path.display(), "Failed to remove scratch audio file");
    }
}

#[derive(Debug, thiserror::Error)]
pub enum UploadError {
    #[error("invalid upload request: {0}")]
    InvalidRequest(String),
    #[error("audio normalization: {0}")]
    Normalization(#[from] AudioNormalizerError),
    #[error("storage: {0}")]
    Storage(#[from] BlobStoreError),
    #[error("database: {0}")]
    Repository(#[from] RepositoryError),
}
