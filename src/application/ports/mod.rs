mod audio_normalizer;
mod blob_store;
mod repository_error;
mod transcription_repository;

pub use audio_normalizer::{AudioNormalizer, AudioNormalizerError, NormalizedAudio};
pub use blob_store::{BlobStore, BlobStoreError};
pub use repository_error::RepositoryError;
pub use transcription_repository::TranscriptionRepository;
