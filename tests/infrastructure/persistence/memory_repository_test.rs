use audioscribe::application::ports::{RepositoryError, TranscriptionRepository};
use audioscribe::domain::TranscriptionRecord;
use audioscribe::infrastructure::persistence::{
    InMemoryTranscriptionRepository, UnavailableTranscriptionRepository,
};

#[tokio::test]
async fn given_records_when_inserting_then_they_are_kept_in_order() {
    let repository = InMemoryTranscriptionRepository::new();

    repository
        .insert(&TranscriptionRecord::new("memory://audiodata/1", "one"))
        .await
        .unwrap();
    repository
        .insert(&TranscriptionRecord::new("memory://audiodata/2", "two"))
        .await
        .unwrap();

    let records = repository.records().await;
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].transcription, "one");
    assert_eq!(records[1].transcription, "two");
}

#[tokio::test]
async fn given_unavailable_database_when_inserting_then_returns_connection_error() {
    let repository = UnavailableTranscriptionRepository;

    let result = repository
        .insert(&TranscriptionRecord::new("memory://audiodata/1", "one"))
        .await;

    assert!(matches!(result, Err(RepositoryError::ConnectionFailed(_))));
}
