use audioscribe::domain::{AudioUpload, canonical_filename, is_canonical_audio};

#[test]
fn given_wav_extension_in_any_case_when_checking_then_is_canonical() {
    assert!(is_canonical_audio("clip.wav"));
    assert!(is_canonical_audio("CLIP.WAV"));
    assert!(is_canonical_audio("take.2.Wav"));
}

#[test]
fn given_other_or_missing_extension_when_checking_then_is_not_canonical() {
    assert!(!is_canonical_audio("clip.mp3"));
    assert!(!is_canonical_audio("clip.wav.mp3"));
    assert!(!is_canonical_audio("wav"));
    assert!(!is_canonical_audio("clip"));
}

#[test]
fn given_compressed_filename_when_converting_then_extension_becomes_wav() {
    assert_eq!(canonical_filename("lecture.mp3"), "lecture.wav");
    assert_eq!(canonical_filename("voice.note.m4a"), "voice.note.wav");
}

#[test]
fn given_filename_without_extension_when_converting_then_wav_is_appended() {
    assert_eq!(canonical_filename("recording"), "recording.wav");
}

#[test]
fn given_upload_named_wav_when_checking_then_upload_is_canonical() {
    let upload = AudioUpload::new("clip.wav", vec![1u8, 2, 3]);

    assert!(upload.is_canonical());
    assert_eq!(upload.size_bytes(), 3);
}
