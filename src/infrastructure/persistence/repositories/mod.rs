mod mock_repository;
mod mongo_transcription_repository;
mod repository_factory;

pub use mock_repository::{InMemoryTranscriptionRepository, UnavailableTranscriptionRepository};
pub use mongo_transcription_repository::MongoTranscriptionRepository;
pub use repository_factory::TranscriptionRepositoryFactory;
