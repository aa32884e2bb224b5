use std::str::FromStr;

use crate::application::ports::BlobStoreError;

const DEFAULT_PROTOCOL: &str = "https";
const DEFAULT_ENDPOINT_SUFFIX: &str = "core.windows.net";
const EMULATOR_ACCOUNT: &str = "devstoreaccount1";
const EMULATOR_BLOB_ENDPOINT: &str = "http://127.0.0.1:10000/devstoreaccount1";

/// Fields of an Azure Storage connection string relevant to blob access.
///
/// Accepts the `Key=Value;...` form shown in the Azure portal as well as the
/// `UseDevelopmentStorage=true` shortcut for Azurite.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AzureConnectionString {
    pub account_name: String,
    pub account_key: String,
    pub protocol: String,
    pub endpoint_suffix: String,
    pub blob_endpoint: Option<String>,
    pub use_development_storage: bool,
}

impl AzureConnectionString {
    /// Base URL of the blob service, without a trailing slash.
    pub fn blob_service_url(&self) -> String {
        match &self.blob_endpoint {
            Some(endpoint) => endpoint.trim_end_matches('/').to_string(),
            None if self.use_development_storage => EMULATOR_BLOB_ENDPOINT.to_string(),
            None => format!(
                "{}://{}.blob.{}",
                self.protocol, self.account_name, self.endpoint_suffix
            ),
        }
    }
}

impl FromStr for AzureConnectionString {
    type Err = BlobStoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut account_name = None;
        let mut account_key = None;
        let mut protocol = None;
        let mut endpoint_suffix = None;
        let mut blob_endpoint = None;
        let mut use_development_storage = false;

        for pair in s.split(';').map(str::trim).filter(|p| !p.is_empty()) {
            let (key, value) = pair.split_once('=').ok_or_else(|| {
                BlobStoreError::Configuration("connection string segment without '='".into())
            })?;
            let value = value.trim().to_string();

            match key.trim().to_ascii_lowercase().as_str() {
                "accountname" => account_name = Some(value),
                "accountkey" => account_key = Some(value),
                "defaultendpointsprotocol" => protocol = Some(value),
                "endpointsuffix" => endpoint_suffix = Some(value),
                "blobendpoint" => blob_endpoint = Some(value),
                "usedevelopmentstorage" => {
                    use_development_storage = value.eq_ignore_ascii_case("true")
                }
                _ => {}
            }
        }

        if use_development_storage {
            return Ok(Self {
                account_name: account_name.unwrap_or_else(|| EMULATOR_ACCOUNT.to_string()),
                account_key: account_key.unwrap_or_default(),
                protocol: protocol.unwrap_or_else(|| "http".to_string()),
                endpoint_suffix: endpoint_suffix.unwrap_or_default(),
                blob_endpoint,
                use_development_storage,
            });
        }

        let account_name = account_name.ok_or_else(|| {
            BlobStoreError::Configuration("connection string has no AccountName".into())
        })?;
        let account_key = account_key.ok_or_else(|| {
            BlobStoreError::Configuration("connection string has no AccountKey".into())
        })?;

        Ok(Self {
            account_name,
            account_key,
            protocol: protocol.unwrap_or_else(|| DEFAULT_PROTOCOL.to_string()),
            endpoint_suffix: endpoint_suffix
                .unwrap_or_else(|| DEFAULT_ENDPOINT_SUFFIX.to_string()),
            blob_endpoint,
            use_development_storage,
        })
    }
}

