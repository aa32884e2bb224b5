
use std::sync::{Arc, Mutex};

use axum::Router;
use axum::body::Body;
use axum::http::Request;
use bytes::Bytes;

use audioscribe::application::ports::{
    AudioNormalizer, BlobStore, BlobStoreError, TranscriptionRepository,
};
use audioscribe::application::services::UploadService;
use audioscribe::domain::BlobKey;
use audioscribe::infrastructure::audio::WavNormalizer;
use audioscribe::infrastructure::persistence::InMemoryTranscriptionRepository;
use audioscribe::infrastructure::storage::ObjectBlobStore;
use audioscribe::presentation::{AppState, create_router};

pub const BOUNDARY: &str = "audioscribe-test-boundary";
pub const TEST_CONTAINER: &str = "audiodata";
pub const TEST_UPLOAD_LIMIT: usize = 8 * 1024 * 1024;

/// 16-bit PCM WAV with interleaved `samples`.
pub fn build_wav(sample_rate: u32, channels: u16, samples: &[i16]) -> Vec<u8> {
    let block_align = channels as u32 * 2;
    let byte_rate = sample_rate * block_align;
    let data_size = samples.len() as u32 * 2;
    let file_size = 36 + data_size;

    let mut wav = Vec::with_capacity(44 + data_size as usize);
    wav.extend_from_slice(b"RIFF");
    wav.extend_from_slice(&file_size.to_le_bytes());
    wav.extend_from_slice(b"WAVE");
    wav.extend_from_slice(b"fmt ");
    wav.extend_from_slice(&16u32.to_le_bytes());
    wav.extend_from_slice(&1u16.to_le_bytes()); // PCM
    wav.extend_from_slice(&channels.to_le_bytes());
    wav.extend_from_slice(&sample_rate.to_le_bytes());
    wav.extend_from_slice(&byte_rate.to_le_bytes());
    wav.extend_from_slice(&(block_align as u16).to_le_bytes());
    wav.extend_from_slice(&16u16.to_le_bytes());
    wav.extend_from_slice(b"data");
    wav.extend_from_slice(&data_size.to_le_bytes());
    for &s in samples {
        wav.extend_from_slice(&s.to_le_bytes());
    }
    wav
}

pub fn tone(frames: usize, channels: u16) -> Vec<i16> {
    (0..frames * channels as usize)
        .map(|i| ((i % 64) as i16 - 32) * 500)
        .collect()
}

pub enum Part<'a> {
    File {
        name: &'a str,
        filename: &'a str,
        data: &'a [u8],
    },
    Text {
        name: &'a str,
        value: &'a str,
    },
}

pub fn multipart_body(parts: &[Part<'_>]) -> Vec<u8> {
    let mut body = Vec::new();
    for part in parts {
        body.extend_from_slice(format!("--{}\r\n", BOUNDARY).as_bytes());
        match part {
            Part::File {
                name,
                filename,
                data,
            } => {
                body.extend_from_slice(
                    format!(
                        "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\n\
                         Content-Type: application/octet-stream\r\n\r\n",
                        name, filename
                    )
                    .as_bytes(),
                );
                body.extend_from_slice(data);
            }
            Part::Text { name, value } => {
                body.extend_from_slice(
                    format!("Content-Disposition: form-data; name=\"{}\"\r\n\r\n", name)
                        .as_bytes(),
                );
                body.extend_from_slice(value.as_bytes());
            }
        }
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{}--\r\n", BOUNDARY).as_bytes());
    body
}

pub fn upload_request(parts: &[Part<'_>]) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/upload")
        .header(
            "content-type",
            format!("multipart/form-data; boundary={}", BOUNDARY),
        )
        .body(Body::from(multipart_body(parts)))
        .unwrap()
}

pub async fn json_body(response: axum::response::Response) -> serde_json::Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

/// In-memory blob store that remembers every key it was asked to write.
pub struct RecordingBlobStore {
    inner: ObjectBlobStore,
    keys: Mutex<Vec<BlobKey>>,
}

impl RecordingBlobStore {
    pub fn new() -> Self {
        Self {
            inner: ObjectBlobStore::in_memory(TEST_CONTAINER),
            keys: Mutex::new(Vec::new()),
        }
    }

    pub fn keys(&self) -> Vec<BlobKey> {
        self.keys.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl BlobStore for RecordingBlobStore {
    async fn put(&self, key: &BlobKey, data: Bytes) -> Result<String, BlobStoreError> {
        self.keys.lock().unwrap().push(key.clone());
        self.inner.put(key, data).await
    }

    async fn fetch(&self, key: &BlobKey) -> Result<Bytes, BlobStoreError> {
        self.inner.fetch(key).await
    }

    async fn exists(&self, key: &BlobKey) -> Result<bool, BlobStoreError> {
        self.inner.exists(key).await
    }

    fn url_for(&self, key: &BlobKey) -> String {
        self.inner.url_for(key)
    }
}

pub struct TestApp {
    pub router: Router,
    pub blobs: Arc<RecordingBlobStore>,
    pub records: Arc<InMemoryTranscriptionRepository>,
    pub scratch: tempfile::TempDir,
}

/// Router over in-memory storage with normalization enabled.
pub fn test_app() -> TestApp {
    let scratch = tempfile::TempDir::new().unwrap();
    let blobs = Arc::new(RecordingBlobStore::new());
    let records = Arc::new(InMemoryTranscriptionRepository::new());
    let normalizer: Arc<dyn AudioNormalizer> =
        Arc::new(WavNormalizer::new(scratch.path().to_path_buf()).unwrap());

    let router = app_with(
        Arc::clone(&blobs) as Arc<dyn BlobStore>,
        Arc::clone(&records) as Arc<dyn TranscriptionRepository>,
        Some(normalizer),
    );

    TestApp {
        router,
        blobs,
        records,
        scratch,
    }
}

pub fn app_with(
    blob_store: Arc<dyn BlobStore>,
    repository: Arc<dyn TranscriptionRepository>,
    normalizer: Option<Arc<dyn AudioNormalizer>>,
) -> Router {
    let upload_service = Arc::new(UploadService::new(blob_store, repository, normalizer));
    create_router(AppState::new(upload_service, TEST_UPLOAD_LIMIT))
}
