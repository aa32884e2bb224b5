use std::path::{Path, PathBuf};

use uuid::Uuid;

use crate::application::ports::{AudioNormalizer, AudioNormalizerError, NormalizedAudio};
use crate::domain::{canonical_filename, extension_of};

use super::audio_decoder::{DecodedAudio, decode_audio};

/// Rewrites uploads as 16-bit PCM WAV at their original sample rate and
/// channel count.
pub struct WavNormalizer {
    scratch_dir: PathBuf,
}

impl WavNormalizer {
    pub fn new(scratch_dir: PathBuf) -> Result<Self, AudioNormalizerError> {
        std::fs::create_dir_all(&scratch_dir)?;
        Ok(Self { scratch_dir })
    }

    pub fn scratch_dir(&self) -> &Path {
        &self.scratch_dir
    }

    fn scratch_path(&self, filename: &str) -> PathBuf {
        self.scratch_dir.join(format!("{}_{}", Uuid::new_v4(), filename))
    }
}

impl AudioNormalizer for WavNormalizer {
    #[tracing::instrument(skip(self, data), fields(bytes = data.len()))]
    fn normalize(
        &self,
        data: &[u8],
        filename: &str,
    ) -> Result<NormalizedAudio, AudioNormalizerError> {
        let decoded = decode_audio(data, extension_of(filename))?;

        let wav_filename = canonical_filename(filename);
        let path = self.scratch_path(&wav_filename);
        let encoded = encode_to_scratch(&path, &decoded)?;

        tracing::debug!(
            path = %path.display(),
            frames = decoded.frames(),
            "Wrote normalized audio"
        );

        Ok(NormalizedAudio {
            filename: wav_filename,
            path,
            data: encoded.into(),
            sample_rate: decoded.sample_rate,
            channels: decoded.channels,
        })
    }
}

/// Writes `audio` to `path` and reads the encoded bytes back. The scratch file
/// is removed again if either step fails.
fn encode_to_scratch(
    path: &Path,
    audio: &DecodedAudio,
) -> Result<Vec<u8>, AudioNormalizerError> {
    write_wav(path, audio)
        .and_then(|()| Ok(std::fs::read(path)?))
        .inspect_err(|_| discard_partial(path))
}

fn discard_partial(path: &Path) {
    match std::fs::remove_file(path) {
        Ok(()) => {}
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => {
            tracing::warn!(
                error = %e,
                path = %path.display(),
                "Failed to remove partial scratch file"
            );
        }
    }
}

fn write_wav(path: &Path, audio: &DecodedAudio) -> Result<(), AudioNormalizerError> {
    let spec = hound::WavSpec {
        channels: audio.channels,
        sample_rate: audio.sample_rate,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };

    let mut writer = hound::WavWriter::create(path, spec).map_err(encoding_error)?;
    for &sample in &audio.samples {
        writer.write_sample(to_pcm16(sample)).map_err(encoding_error)?;
    }
    writer.finalize().map_err(encoding_error)
}

fn to_pcm16(sample: f32) -> i16 {
    (sample.clamp(-1.0, 1.0) * i16::MAX as f32) as i16
}

fn encoding_error(e: hound::Error) -> AudioNormalizerError {
    AudioNormalizerError::EncodingFailed(e.to_string())
}
