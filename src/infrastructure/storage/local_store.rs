use std::path::Path;
use std::sync::Arc;

use object_store::local::LocalFileSystem;

use crate::application::ports::BlobStoreError;

use super::object_blob_store::ObjectBlobStore;

impl ObjectBlobStore {
    /// Stores blobs under `{root}/{container}` on the local filesystem and
    /// hands out `file://` URLs.
    pub fn local(root: &Path, container: &str) -> Result<Self, BlobStoreError> {
        let base = root.join(container);
        std::fs::create_dir_all(&base)?;
        let base = std::fs::canonicalize(&base)?;

        let fs = LocalFileSystem::new_with_prefix(&base)
            .map_err(|e| BlobStoreError::Configuration(e.to_string()))?;

        Ok(Self::new(Arc::new(fs), format!("file://{}", base.display())))
    }
}
