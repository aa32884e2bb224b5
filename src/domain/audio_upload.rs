use bytes::Bytes;

use super::audio_format::is_canonical_audio;

/// An audio file as received from the client.
#[derive(Debug, Clone)]
pub struct AudioUpload {
    pub filename: String,
    pub data: Bytes,
}

impl AudioUpload {
    pub fn new(filename: impl Into<String>, data: impl Into<Bytes>) -> Self {
        Self {
            filename: filename.into(),
            data: data.into(),
        }
    }

    pub fn is_canonical(&self) -> bool {
        is_canonical_audio(&self.filename)
    }

    pub fn size_bytes(&self) -> u64 {
        self.data.len() as u64
    }
}
