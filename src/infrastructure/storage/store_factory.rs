use std::path::Path;
use std::sync::Arc;

use crate::application::ports::{BlobStore, BlobStoreError};
use crate::presentation::config::{
    STORAGE_CONNECTION_STRING_VAR, StorageProviderSetting, StorageSettings,
};

use super::connection_string::AzureConnectionString;
use super::object_blob_store::ObjectBlobStore;

pub struct BlobStoreFactory;

impl BlobStoreFactory {
    pub fn create(settings: &StorageSettings) -> Result<Arc<dyn BlobStore>, BlobStoreError> {
        match settings.provider {
            StorageProviderSetting::Azure => {
                let raw = settings.connection_string.as_deref().ok_or_else(|| {
                    BlobStoreError::Configuration(format!(
                        "{} is required for the azure provider",
                        STORAGE_CONNECTION_STRING_VAR
                    ))
                })?;
                let connection: AzureConnectionString = raw.parse()?;
                let store = ObjectBlobStore::azure(&connection, &settings.container)?;
                Ok(Arc::new(store))
            }
            StorageProviderSetting::Local => {
                let store =
                    ObjectBlobStore::local(Path::new(&settings.local_path), &settings.container)?;
                Ok(Arc::new(store))
            }
            StorageProviderSetting::Memory => {
                tracing::warn!("Using in-memory blob store, uploads are not persisted");
                Ok(Arc::new(ObjectBlobStore::in_memory(&settings.container)))
            }
        }
    }
}
