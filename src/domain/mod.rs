mod audio_format;
mod audio_upload;
mod blob_key;
mod transcription_record;
mod upload_id;

pub use audio_format::{CANONICAL_EXTENSION, canonical_filename, extension_of, is_canonical_audio};
pub use audio_upload::AudioUpload;
pub use blob_key::BlobKey;
pub use transcription_record::TranscriptionRecord;
pub use upload_id::UploadId;
