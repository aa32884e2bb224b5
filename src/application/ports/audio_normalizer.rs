use std::path::PathBuf;

use bytes::Bytes;

/// Re-encodes audio into the canonical container.
///
/// Implementations are CPU bound and synchronous; callers on the async
/// runtime should move the work onto a blocking thread.
pub trait AudioNormalizer: Send + Sync {
    fn normalize(
        &self,
        data: &[u8],
        filename: &str,
    ) -> Result<NormalizedAudio, AudioNormalizerError>;
}

#[derive(Debug, Clone)]
pub struct NormalizedAudio {
    /// Filename to store the audio under, e.g. `lecture.wav`.
    pub filename: String,
    /// Scratch file the encoded audio was written to.
    pub path: PathBuf,
    pub data: Bytes,
    pub sample_rate: u32,
    pub channels: u16,
}

#[derive(Debug, thiserror::Error)]
pub enum AudioNormalizerError {
    #[error("audio decoding failed: {0}")]
    DecodingFailed(String),
    #[error("audio encoding failed: {0}")]
    EncodingFailed(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
