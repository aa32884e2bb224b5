use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;

use audioscribe::application::ports::AudioNormalizer;
use audioscribe::application::services::UploadService;
use audioscribe::infrastructure::audio::WavNormalizer;
use audioscribe::infrastructure::observability::{TracingConfig, init_tracing};
use audioscribe::infrastructure::persistence::TranscriptionRepositoryFactory;
use audioscribe::infrastructure::storage::BlobStoreFactory;
use audioscribe::presentation::{AppState, Environment, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;
    let settings = Settings::load(environment).context("Failed to load settings")?;

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port)
        .parse()
        .context("Invalid server address")?;

    init_tracing(&TracingConfig::default(), addr);

    let blob_store =
        BlobStoreFactory::create(&settings.storage).context("Failed to configure blob store")?;
    let repository = TranscriptionRepositoryFactory::create(&settings.database)
        .await
        .context("Failed to configure transcription repository")?;

    let normalizer: Option<Arc<dyn AudioNormalizer>> = if settings.audio.normalize {
        let normalizer = WavNormalizer::new(PathBuf::from(&settings.audio.scratch_dir))
            .context("Failed to prepare audio scratch directory")?;
        Some(Arc::new(normalizer))
    } else {
        tracing::info!("Audio normalization disabled, uploads are stored as received");
        None
    };

    let upload_service = Arc::new(UploadService::new(blob_store, repository, normalizer));
    let state = AppState::new(upload_service, settings.audio.max_upload_bytes());

    let router = create_router(state);

    let listener = TcpListener::bind(addr).await?;
    tracing::info!(environment = %environment, "Listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
