use serde::{Deserialize, Serialize};

/// Document persisted for every successful upload.
///
/// Field names match the documents already stored in the
/// `Audio_Transcription` collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriptionRecord {
    pub audio: String,
    pub transcription: String,
}

impl TranscriptionRecord {
    pub fn new(audio_url: impl Into<String>, transcription: impl Into<String>) -> Self {
        Self {
            audio: audio_url.into(),
            transcription: transcription.into(),
        }
    }
}
