mod environment;
mod settings;

pub use environment::{ENVIRONMENT_VAR, Environment};
pub use settings::{
    AudioSettings, DATABASE_URI_VAR, DEFAULT_COLLECTION, DEFAULT_CONTAINER, DEFAULT_DATABASE,
    DatabaseProviderSetting, DatabaseSettings, STORAGE_CONNECTION_STRING_VAR, ServerSettings,
    Settings, StorageProviderSetting, StorageSettings,
};
