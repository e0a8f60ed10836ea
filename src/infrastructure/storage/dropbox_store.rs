use async_trait::async_trait;
use bytes::Bytes;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;

use crate::application::ports::{ArchiveStore, ArchiveStoreError, StoredFile};

const CREATE_FOLDER_URL: &str = "https://api.dropboxapi.com/2/files/create_folder_v2";
const UPLOAD_URL: &str = "https://content.dropboxapi.com/2/files/upload";

/// Archive backed by the Dropbox HTTP API. Folder creation treats the 409
/// "already exists" conflict as success, so provisioning the full skeleton is
/// idempotent; uploads run with autorename and the name Dropbox actually used
/// is surfaced to the caller.
pub struct DropboxArchiveStore {
    client: Client,
    access_token: String,
}

#[derive(Deserialize)]
struct UploadResponse {
    name: String,
}

impl DropboxArchiveStore {
    pub fn new(access_token: String) -> Self {
        Self {
            client: Client::new(),
            access_token,
        }
    }
}

#[async_trait]
impl ArchiveStore for DropboxArchiveStore {
    async fn ensure_folder(&self, path: &str) -> Result<(), ArchiveStoreError> {
        let response = self
            .client
            .post(CREATE_FOLDER_URL)
            .bearer_auth(&self.access_token)
            .json(&json!({ "path": path, "autorename": false }))
            .send()
            .await
            .map_err(|e| ArchiveStoreError::FolderCreationFailed(e.to_string()))?;

        let status = response.status();
        // 409 = folder already exists; that is the goal state.
        if status.is_success() || status == reqwest::StatusCode::CONFLICT {
            return Ok(());
        }
        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(ArchiveStoreError::Unauthorized);
        }
        let body = response.text().await.unwrap_or_default();
        Err(ArchiveStoreError::FolderCreationFailed(format!(
            "HTTP {}: {}",
            status, body
        )))
    }

    async fn write_file(
        &self,
        folder: &str,
        filename: &str,
        data: Bytes,
    ) -> Result<StoredFile, ArchiveStoreError> {
        let arg = json!({
            "path": format!("{}/{}", folder.trim_end_matches('/'), filename),
            "mode": "add",
            "autorename": true,
            "mute": false,
        });

        let response = self
            .client
            .post(UPLOAD_URL)
            .bearer_auth(&self.access_token)
            .header("Dropbox-API-Arg", header_safe(&arg.to_string()))
            .header("Content-Type", "application/octet-stream")
            .body(data)
            .send()
            .await
            .map_err(|e| ArchiveStoreError::UploadFailed(e.to_string()))?;

        if response.status() == reqwest::StatusCode::UNAUTHORIZED {
            return Err(ArchiveStoreError::Unauthorized);
        }
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(ArchiveStoreError::UploadFailed(format!(
                "HTTP {}: {}",
                status, body
            )));
        }

        let upload: UploadResponse = response
            .json()
            .await
            .map_err(|e| ArchiveStoreError::UploadFailed(e.to_string()))?;

        Ok(StoredFile {
            was_renamed: upload.name != filename,
            stored_name: upload.name,
        })
    }
}

/// Dropbox requires the API-arg header to be pure ASCII; non-ASCII characters
/// (accented folder names) are escaped as `\uXXXX` UTF-16 units.
fn header_safe(raw_json: &str) -> String {
    let mut out = String::with_capacity(raw_json.len());
    let mut buf = [0u16; 2];
    for c in raw_json.chars() {
        if c.is_ascii() {
            out.push(c);
        } else {
            for unit in c.encode_utf16(&mut buf) {
                out.push_str(&format!("\\u{:04x}", unit));
            }
        }
    }
    out
}
