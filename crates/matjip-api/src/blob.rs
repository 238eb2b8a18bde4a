//! # Blob Store
//!
//! Menu-image hosting behind one pluggable interface: the backend upload
//! endpoint, or an in-memory fixture that keeps uploads as base64 data URLs
//! under synthetic `/images/fixture_...` paths. The synthetic-path
//! convention is an implementation detail of the fixture backend; callers
//! only ever see an opaque image path.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use tracing::debug;

use crate::context::{ensure_success, RequestContext};
use crate::error::{ApiError, ApiResult};

// =============================================================================
// Trait
// =============================================================================

/// Image hosting for the menu-management page.
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Stores an image and returns its path.
    async fn upload(&self, filename: &str, bytes: Vec<u8>) -> ApiResult<String>;

    /// Retrieves an image by the path `upload` returned. `None` when the
    /// path is unknown.
    async fn fetch(&self, path: &str) -> ApiResult<Option<Vec<u8>>>;
}

// =============================================================================
// Remote Implementation
// =============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UploadResponse {
    image_path: String,
}

/// Image hosting over the backend upload endpoint.
#[derive(Debug, Clone)]
pub struct RemoteBlobStore {
    ctx: RequestContext,
}

impl RemoteBlobStore {
    pub fn new(ctx: RequestContext) -> Self {
        RemoteBlobStore { ctx }
    }
}

#[async_trait]
impl BlobStore for RemoteBlobStore {
    async fn upload(&self, filename: &str, bytes: Vec<u8>) -> ApiResult<String> {
        debug!(filename = %filename, size = bytes.len(), "Uploading image");

        let part = Part::bytes(bytes).file_name(filename.to_string());
        let form = Form::new().part("image", part);

        let response =
            ensure_success(self.ctx.post("/images/upload").multipart(form).send().await?)?;
        let upload: UploadResponse = response.json().await?;
        Ok(upload.image_path)
    }

    async fn fetch(&self, path: &str) -> ApiResult<Option<Vec<u8>>> {
        let response = self.ctx.get(path).send().await?;
        if response.status().as_u16() == 404 {
            return Ok(None);
        }
        let response = ensure_success(response)?;
        Ok(Some(response.bytes().await?.to_vec()))
    }
}

// =============================================================================
// Fixture Implementation
// =============================================================================

/// In-memory image hosting.
///
/// Uploads become `data:<mime>;base64,...` URLs keyed by synthetic paths of
/// the form `/images/fixture_<seq>_<filename>`.
#[derive(Debug, Default)]
pub struct FixtureBlobStore {
    blobs: Mutex<HashMap<String, String>>,
    seq: AtomicU64,
}

impl FixtureBlobStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn mime_for(filename: &str) -> &'static str {
        match filename.rsplit('.').next() {
            Some("png") => "image/png",
            Some("jpg") | Some("jpeg") => "image/jpeg",
            Some("gif") => "image/gif",
            Some("webp") => "image/webp",
            _ => "application/octet-stream",
        }
    }
}

#[async_trait]
impl BlobStore for FixtureBlobStore {
    async fn upload(&self, filename: &str, bytes: Vec<u8>) -> ApiResult<String> {
        let seq = self.seq.fetch_add(1, Ordering::Relaxed);
        let path = format!("/images/fixture_{}_{}", seq, filename);
        let data_url = format!(
            "data:{};base64,{}",
            Self::mime_for(filename),
            BASE64.encode(&bytes)
        );

        debug!(path = %path, size = bytes.len(), "Storing fixture image");
        self.blobs
            .lock()
            .expect("blob mutex poisoned")
            .insert(path.clone(), data_url);
        Ok(path)
    }

    async fn fetch(&self, path: &str) -> ApiResult<Option<Vec<u8>>> {
        let data_url = match self.blobs.lock().expect("blob mutex poisoned").get(path) {
            Some(data_url) => data_url.clone(),
            None => return Ok(None),
        };

        let encoded = data_url
            .split_once(";base64,")
            .map(|(_, encoded)| encoded.to_string())
            .ok_or_else(|| ApiError::Decode("fixture blob is not a base64 data URL".to_string()))?;

        let bytes = BASE64
            .decode(encoded)
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(Some(bytes))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fixture_upload_fetch_round_trip() {
        let store = FixtureBlobStore::new();
        let bytes = vec![0x89, 0x50, 0x4e, 0x47, 0x0d, 0x0a];

        let path = store.upload("menu.png", bytes.clone()).await.unwrap();
        assert!(path.starts_with("/images/fixture_"));
        assert!(path.ends_with("_menu.png"));

        let fetched = store.fetch(&path).await.unwrap();
        assert_eq!(fetched, Some(bytes));
    }

    #[tokio::test]
    async fn test_fixture_paths_are_unique() {
        let store = FixtureBlobStore::new();
        let a = store.upload("menu.png", vec![1]).await.unwrap();
        let b = store.upload("menu.png", vec![2]).await.unwrap();
        assert_ne!(a, b);
    }

    #[tokio::test]
    async fn test_fixture_fetch_unknown_path() {
        let store = FixtureBlobStore::new();
        assert_eq!(store.fetch("/images/nope.png").await.unwrap(), None);
    }

    #[test]
    fn test_mime_guessing() {
        assert_eq!(FixtureBlobStore::mime_for("a.png"), "image/png");
        assert_eq!(FixtureBlobStore::mime_for("a.jpeg"), "image/jpeg");
        assert_eq!(FixtureBlobStore::mime_for("a.bin"), "application/octet-stream");
    }
}
