use audioscribe::domain::{BlobKey, UploadId};

#[test]
fn given_upload_id_and_filename_when_creating_key_then_format_is_uuid_underscore_filename() {
    let id = UploadId::new();
    let key = BlobKey::new(&id, "lecture.wav");

    assert_eq!(key.as_str(), format!("{}_lecture.wav", id.as_uuid()));
}

#[test]
fn given_same_filename_when_creating_keys_for_two_uploads_then_keys_differ() {
    let key_a = BlobKey::new(&UploadId::new(), "clip.wav");
    let key_b = BlobKey::new(&UploadId::new(), "clip.wav");

    assert_ne!(key_a, key_b);
}

#[test]
fn given_filename_with_directories_when_creating_key_then_only_base_name_is_kept() {
    let id = UploadId::new();

    let unix = BlobKey::new(&id, "../../etc/clip.wav");
    let windows = BlobKey::new(&id, r"C:\Users\me\clip.wav");

    assert_eq!(unix.as_str(), format!("{}_clip.wav", id.as_uuid()));
    assert_eq!(windows.as_str(), format!("{}_clip.wav", id.as_uuid()));
}

#[test]
fn given_key_when_displayed_then_matches_as_str() {
    let key = BlobKey::new(&UploadId::new(), "clip.wav");

    assert_eq!(format!("{}", key), key.as_str());
}
