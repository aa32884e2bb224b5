use std::fmt;

use super::upload_id::UploadId;

/// Object key under which an uploaded audio file is stored.
///
/// Keys take the form `{upload-id}_{filename}`. Only the final path segment
/// of the client-supplied filename is kept.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BlobKey(String);

impl BlobKey {
    pub fn new(upload_id: &UploadId, filename: &str) -> Self {
        Self(format!("{}_{}", upload_id.as_uuid(), base_name(filename)))
    }

    pub fn from_raw(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BlobKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn base_name(filename: &str) -> &str {
    filename
        .rsplit(['/', '\\'])
        .find(|segment| !segment.is_empty())
        .unwrap_or("unknown")
}
