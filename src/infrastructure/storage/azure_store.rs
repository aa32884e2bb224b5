use std::sync::Arc;

use object_store::azure::MicrosoftAzureBuilder;

use crate::application::ports::BlobStoreError;

use super::connection_string::AzureConnectionString;
use super::object_blob_store::ObjectBlobStore;

impl ObjectBlobStore {
    /// Azure Blob Storage container addressed through a parsed connection
    /// string. Returned URLs point at `{blob service}/{container}/{key}`.
    pub fn azure(
        connection: &AzureConnectionString,
        container: &str,
    ) -> Result<Self, BlobStoreError> {
        let mut builder = MicrosoftAzureBuilder::new().with_container_name(container);

        if connection.use_development_storage {
            builder = builder.with_use_emulator(true);
        } else {
            builder = builder
                .with_account(&connection.account_name)
                .with_access_key(&connection.account_key);
            if let Some(endpoint) = &connection.blob_endpoint {
                builder = builder
                    .with_endpoint(endpoint.clone())
                    .with_allow_http(endpoint.starts_with("http://"));
            }
        }

        let store = builder
            .build()
            .map_err(|e| BlobStoreError::Configuration(e.to_string()))?;

        tracing::info!(
            account = %connection.account_name,
            container = %container,
            "Azure blob store configured"
        );

        Ok(Self::new(
            Arc::new(store),
            format!("{}/{}", connection.blob_service_url(), container),
        ))
    }
}
