pub mod audio_decoder;
mod wav_normalizer;

pub use audio_decoder::{DecodedAudio, decode_audio};
pub use wav_normalizer::WavNormalizer;
