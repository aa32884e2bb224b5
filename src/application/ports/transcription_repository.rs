use async_trait::async_trait;

use crate::domain::TranscriptionRecord;

use super::RepositoryError;

#[async_trait]
pub trait TranscriptionRepository: Send + Sync {
    async fn insert(&self, record: &TranscriptionRecord) -> Result<(), RepositoryError>;
}
