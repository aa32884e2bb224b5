use std::sync::Arc;

use crate::application::ports::{RepositoryError, TranscriptionRepository};
use crate::infrastructure::persistence::create_client;
use crate::presentation::config::{DATABASE_URI_VAR, DatabaseProviderSetting, DatabaseSettings};

use super::mock_repository::InMemoryTranscriptionRepository;
use super::mongo_transcription_repository::MongoTranscriptionRepository;

pub struct TranscriptionRepositoryFactory;

impl TranscriptionRepositoryFactory {
    pub async fn create(
        settings: &DatabaseSettings,
    ) -> Result<Arc<dyn TranscriptionRepository>, RepositoryError> {
        match settings.provider {
            DatabaseProviderSetting::Mongo => {
                let uri = settings.uri.as_deref().ok_or_else(|| {
                    RepositoryError::ConnectionFailed(format!(
                        "{} is required for the mongo provider",
                        DATABASE_URI_VAR
                    ))
                })?;
                let client = create_client(uri).await?;
                Ok(Arc::new(MongoTranscriptionRepository::new(
                    &client,
                    &settings.name,
                    &settings.collection,
                )))
            }
            DatabaseProviderSetting::Memory => {
                tracing::warn!(
                    "Using in-memory transcription repository, records are not persisted"
                );
                Ok(Arc::new(InMemoryTranscriptionRepository::new()))
            }
        }
    }
}
