use async_trait::async_trait;

use crate::models::media::{DeleteResult, PingResult, UploadResult};

/// Options for an upload request.
#[derive(Debug, Clone)]
pub struct UploadOptions {
    /// Destination folder/namespace for the asset.
    pub folder: String,
    /// Caller-chosen public identifier for the asset.
    pub public_id: String,
}

/// Capability surface of the hosted media-storage provider.
///
/// The probe depends only on this trait, so it can run against a fake
/// collaborator in tests without network access.
#[async_trait]
pub trait MediaStorage: Send + Sync {
    /// Health check. Returns provider status and rate-limit counters.
    async fn ping(&self) -> Result<PingResult, MediaStoreError>;

    /// Upload a remote source (by URL) under the given folder and public id.
    async fn upload(
        &self,
        source_url: &str,
        options: &UploadOptions,
    ) -> Result<UploadResult, MediaStoreError>;

    /// Delete an asset by the public id the upload returned.
    ///
    /// A missing asset is not an error; it surfaces as a non-`"ok"`
    /// [`DeleteResult::result`].
    async fn delete(&self, public_id: &str) -> Result<DeleteResult, MediaStoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum MediaStoreError {
    #[error("authentication rejected: {0}")]
    Auth(String),

    #[error("provider unreachable: {0}")]
    Connectivity(String),

    #[error("upload rejected by provider: {0}")]
    Upload(String),
}
