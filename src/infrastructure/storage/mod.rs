mod azure_store;
mod connection_string;
mod local_store;
mod memory_store;
mod mock_store;
mod object_blob_store;
mod store_factory;

pub use connection_string::AzureConnectionString;
pub use mock_store::UnavailableBlobStore;
pub use object_blob_store::ObjectBlobStore;
pub use store_factory::BlobStoreFactory;
