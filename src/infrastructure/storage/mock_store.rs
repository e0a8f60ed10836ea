use std::sync::Mutex;

use async_trait::async_trait;
use bytes::Bytes;

use crate::application::ports::{ArchiveStore, ArchiveStoreError, StoredFile};

/// Recording archive for tests: remembers every folder ensured and every file
/// written, stores nothing.
#[derive(Default)]
pub struct MockArchiveStore {
    pub folders: Mutex<Vec<String>>,
    pub files: Mutex<Vec<(String, String)>>,
}

#[async_trait]
impl ArchiveStore for MockArchiveStore {
    async fn ensure_folder(&self, path: &str) -> Result<(), ArchiveStoreError> {
        self.folders.lock().unwrap().push(path.to_string());
        Ok(())
    }

    async fn write_file(
        &self,
        folder: &str,
        filename: &str,
        _data: Bytes,
    ) -> Result<StoredFile, ArchiveStoreError> {
        self.files
            .lock()
            .unwrap()
            .push((folder.to_string(), filename.to_string()));
        Ok(StoredFile {
            stored_name: filename.to_string(),
            was_renamed: false,
        })
    }
}
