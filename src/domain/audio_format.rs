use std::path::Path;

/// Extension of the uncompressed container every upload is normalized into.
pub const CANONICAL_EXTENSION: &str = "wav";

pub fn extension_of(filename: &str) -> Option<&str> {
    Path::new(filename).extension().and_then(|ext| ext.to_str())
}

pub fn is_canonical_audio(filename: &str) -> bool {
    extension_of(filename)
        .map(|ext| ext.eq_ignore_ascii_case(CANONICAL_EXTENSION))
        .unwrap_or(false)
}

/// `lecture.mp3` becomes `lecture.wav`; names without an extension gain one.
pub fn canonical_filename(filename: &str) -> String {
    let stem = Path::new(filename)
        .file_stem()
        .and_then(|stem| stem.to_str())
        .filter(|stem| !stem.is_empty())
        .unwrap_or("audio");
    format!("{}.{}", stem, CANONICAL_EXTENSION)
}
