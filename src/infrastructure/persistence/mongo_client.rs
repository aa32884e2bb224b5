use mongodb::Client;
use mongodb::options::ClientOptions;
use tracing::{info, instrument};

use crate::application::ports::RepositoryError;

const APP_NAME: &str = "audioscribe";

/// Builds a client from a connection URI. The driver connects lazily, so an
/// unreachable server surfaces on the first insert rather than here.
#[instrument(skip(uri))]
pub async fn create_client(uri: &str) -> Result<Client, RepositoryError> {
    let mut options = ClientOptions::parse(uri)
        .await
        .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;
    options.app_name.get_or_insert_with(|| APP_NAME.to_string());

    let client = Client::with_options(options)
        .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

    info!("MongoDB client configured");
    Ok(client)
}
