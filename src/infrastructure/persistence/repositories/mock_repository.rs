use tokio::sync::RwLock;

use crate::application::ports::{RepositoryError, TranscriptionRepository};
use crate::domain::TranscriptionRecord;

/// Keeps records in process memory.
#[derive(Default)]
pub struct InMemoryTranscriptionRepository {
    records: RwLock<Vec<TranscriptionRecord>>,
}

impl InMemoryTranscriptionRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn records(&self) -> Vec<TranscriptionRecord> {
        self.records.read().await.clone()
    }
}

#[async_trait::async_trait]
impl TranscriptionRepository for InMemoryTranscriptionRepository {
    async fn insert(&self, record: &TranscriptionRecord) -> Result<(), RepositoryError> {
        self.records.write().await.push(record.clone());
        Ok(())
    }
}

/// Rejects every insert, for exercising database outages.
pub struct UnavailableTranscriptionRepository;

#[async_trait::async_trait]
impl TranscriptionRepository for UnavailableTranscriptionRepository {
    async fn insert(&self, _record: &TranscriptionRecord) -> Result<(), RepositoryError> {
        Err(RepositoryError::ConnectionFailed("database unavailable".to_string()))
    }
}
