use std::fmt;

use axum::extract::Multipart;

use crate::application::services::UploadError;
use crate::domain::AudioUpload;

/// Multipart field names accepted by `POST /upload`.
///
/// | version | file field   | text field   |
/// |---------|--------------|--------------|
/// | v1      | `audio_file` | `sentence`   |
/// | v2      | `audio`      | `transcript` |
///
/// v2 is canonical. v1 is still accepted for older clients. A request must
/// use both names from the same version.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldContract {
    V1,
    V2,
}

impl FieldContract {
    pub const ALL: [FieldContract; 2] = [FieldContract::V2, FieldContract::V1];

    pub fn audio_field(&self) -> &'static str {
        match self {
            FieldContract::V1 => "audio_file",
            FieldContract::V2 => "audio",
        }
    }

    pub fn transcript_field(&self) -> &'static str {
        match self {
            FieldContract::V1 => "sentence",
            FieldContract::V2 => "transcript",
        }
    }

    pub fn for_audio_field(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.audio_field() == name)
    }

    pub fn for_transcript_field(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.transcript_field() == name)
    }
}

impl fmt::Display for FieldContract {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldContract::V1 => f.write_str("v1"),
            FieldContract::V2 => f.write_str("v2"),
        }
    }
}

#[derive(Debug)]
pub struct UploadForm {
    pub contract: FieldContract,
    pub audio: AudioUpload,
    pub transcript: String,
}

impl UploadForm {
    /// Reads exactly one audio part and one transcript field. Unknown fields
    /// are skipped.
    pub async fn read(mut multipart: Multipart) -> Result<Self, UploadError> {
        let mut audio: Option<(FieldContract, AudioUpload)> = None;
        let mut transcript: Option<(FieldContract, String)> = None;

        while let Some(field) = multipart.next_field().await.map_err(invalid)? {
            let name = field.name().unwrap_or_default().to_string();

            if let Some(contract) = FieldContract::for_audio_field(&name) {
                if audio.is_some() {
                    return Err(duplicate(&name));
                }
                let filename = field
                    .file_name()
                    .filter(|f| !f.is_empty())
                    .unwrap_or("unknown")
                    .to_string();
                let data = field.bytes().await.map_err(invalid)?;
                audio = Some((contract, AudioUpload::new(filename, data)));
            } else if let Some(contract) = FieldContract::for_transcript_field(&name) {
                if transcript.is_some() {
                    return Err(duplicate(&name));
                }
                let text = field.text().await.map_err(invalid)?;
                transcript = Some((contract, text));
            } else {
                tracing::debug!(field = %name, "Ignoring unexpected multipart field");
            }
        }

        let (contract, audio) = audio.ok_or_else(|| {
            UploadError::InvalidRequest(format!(
                "missing audio file field `{}`",
                FieldContract::V2.audio_field()
            ))
        })?;
        let (transcript_contract, transcript) = transcript.ok_or_else(|| {
            UploadError::InvalidRequest(format!(
                "missing text field `{}`",
                contract.transcript_field()
            ))
        })?;

        if transcript_contract != contract {
            return Err(UploadError::InvalidRequest(format!(
                "field `{}` cannot be combined with `{}`",
                transcript_contract.transcript_field(),
                contract.audio_field()
            )));
        }

        Ok(Self {
            contract,
            audio,
            transcript,
        })
    }
}

fn invalid(e: impl fmt::Display) -> UploadError {
    UploadError::InvalidRequest(format!("failed to read multipart: {}", e))
}

fn duplicate(name: &str) -> UploadError {
    UploadError::InvalidRequest(format!("field `{}` given more than once", name))
}
