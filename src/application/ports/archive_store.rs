use async_trait::async_trait;
use bytes::Bytes;

/// Result of a write; the store may auto-rename on collision, so callers must
/// surface `stored_name` instead of assuming the requested one was used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredFile {
    pub stored_name: String,
    pub was_renamed: bool,
}

/// External object storage where the filing skeleton is provisioned and the
/// document finally lands.
#[async_trait]
pub trait ArchiveStore: Send + Sync {
    /// Idempotent: safe to call for an already-existing path.
    async fn ensure_folder(&self, path: &str) -> Result<(), ArchiveStoreError>;

    async fn write_file(
        &self,
        folder: &str,
        filename: &str,
        data: Bytes,
    ) -> Result<StoredFile, ArchiveStoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ArchiveStoreError {
    #[error("folder creation failed: {0}")]
    FolderCreationFailed(String),
    #[error("upload failed: {0}")]
    UploadFailed(String),
    #[error("storage unauthorized")]
    Unauthorized,
}
