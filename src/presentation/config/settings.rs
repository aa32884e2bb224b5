use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File};
use serde::Deserialize;

use super::Environment;

pub const STORAGE_CONNECTION_STRING_VAR: &str = "AZURE_STORAGE_CONNECTION_STRING";
pub const DATABASE_URI_VAR: &str = "MONGODB_URI";

pub const DEFAULT_CONTAINER: &str = "audiodata";
pub const DEFAULT_DATABASE: &str = "SpeechToText";
pub const DEFAULT_COLLECTION: &str = "Audio_Transcription";

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub storage: StorageSettings,
    pub database: DatabaseSettings,
    pub audio: AudioSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageSettings {
    pub provider: StorageProviderSetting,
    pub connection_string: Option<String>,
    pub container: String,
    pub local_path: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageProviderSetting {
    Azure,
    Local,
    Memory,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseSettings {
    pub provider: DatabaseProviderSetting,
    pub uri: Option<String>,
    pub name: String,
    pub collection: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DatabaseProviderSetting {
    Mongo,
    Memory,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AudioSettings {
    pub normalize: bool,
    pub scratch_dir: String,
    pub max_file_size_mb: usize,
}

impl AudioSettings {
    pub fn max_upload_bytes(&self) -> usize {
        self.max_file_size_mb.saturating_mul(1024 * 1024)
    }
}

impl Settings {
    /// Defaults, then `appsettings.{environment}` if present, then `APP_*`
    /// variables (`APP_SERVER__PORT=9000`).
    pub fn builder(
        environment: Environment,
    ) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        let scratch_dir = std::env::temp_dir().join("audioscribe");

        Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8000_i64)?
            .set_default("storage.provider", "azure")?
            .set_default("storage.container", DEFAULT_CONTAINER)?
            .set_default("storage.local_path", "data/blobs")?
            .set_default("database.provider", "mongo")?
            .set_default("database.name", DEFAULT_DATABASE)?
            .set_default("database.collection", DEFAULT_COLLECTION)?
            .set_default("audio.normalize", true)?
            .set_default("audio.scratch_dir", scratch_dir.to_string_lossy().into_owned())?
            .set_default("audio.max_file_size_mb", 50_i64)?
            .add_source(
                File::with_name(&format!("appsettings.{}", environment.as_str())).required(false),
            )
            .add_source(
                config::Environment::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option(
                "storage.connection_string",
                std::env::var(STORAGE_CONNECTION_STRING_VAR).ok(),
            )?
            .set_override_option("database.uri", std::env::var(DATABASE_URI_VAR).ok())
    }

    pub fn load(environment: Environment) -> Result<Self, ConfigError> {
        Self::builder(environment)?.build()?.try_deserialize()
    }
}
