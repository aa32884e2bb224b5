mod mongo_client;
mod repositories;

pub use mongo_client::create_client;
pub use repositories::{
    InMemoryTranscriptionRepository, MongoTranscriptionRepository, TranscriptionRepositoryFactory,
    UnavailableTranscriptionRepository,
};
