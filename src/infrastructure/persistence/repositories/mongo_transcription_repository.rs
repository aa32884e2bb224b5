use async_trait::async_trait;
use mongodb::{Client, Collection};
use tracing::instrument;

use crate::application::ports::{RepositoryError, TranscriptionRepository};
use crate::domain::TranscriptionRecord;

pub struct MongoTranscriptionRepository {
    collection: Collection<TranscriptionRecord>,
}

impl MongoTranscriptionRepository {
    pub fn new(client: &Client, database: &str, collection: &str) -> Self {
        Self {
            collection: client.database(database).collection(collection),
        }
    }
}

#[async_trait]
impl TranscriptionRepository for MongoTranscriptionRepository {
    #[instrument(skip(self, record), fields(collection = %self.collection.name()))]
    async fn insert(&self, record: &TranscriptionRecord) -> Result<(), RepositoryError> {
        let result = self
            .collection
            .insert_one(record)
            .await
            .map_err(|e| RepositoryError::InsertFailed(e.to_string()))?;

        tracing::debug!(inserted_id = %result.inserted_id, "Transcription record inserted");
        Ok(())
    }
}
