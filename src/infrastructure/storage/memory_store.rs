use std::sync::Arc;

use object_store::memory::InMemory;

use super::object_blob_store::ObjectBlobStore;

impl ObjectBlobStore {
    /// Process-local store; contents are lost on restart.
    pub fn in_memory(container: &str) -> Self {
        Self::new(Arc::new(InMemory::new()), format!("memory://{}", container))
    }
}
