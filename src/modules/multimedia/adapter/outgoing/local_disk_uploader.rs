use async_trait::async_trait;
use regex::Regex;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use tracing::{debug, error};
use uuid::Uuid;

use crate::modules::multimedia::application::ports::outgoing::{
    ImageFile, ImageUploadError, ImageUploader, StoredImage,
};

static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));
static UNSAFE_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9._-]").expect("file name pattern is valid"));
static STORED_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}-[A-Za-z0-9._-]+$")
        .expect("stored name pattern is valid")
});

/// Writes images under `upload_dir` and links them as
/// `{public_base}/uploads/{uuid}-{sanitised name}`.
#[derive(Clone)]
pub struct LocalDiskImageUploader {
    upload_dir: PathBuf,
    public_base: String,
}

impl LocalDiskImageUploader {
    pub fn new(upload_dir: impl Into<PathBuf>, public_base: &str) -> Self {
        Self {
            upload_dir: upload_dir.into(),
            public_base: public_base.trim_end_matches('/').to_string(),
        }
    }

    pub fn upload_dir(&self) -> &Path {
        &self.upload_dir
    }
}

#[async_trait]
impl ImageUploader for LocalDiskImageUploader {
    async fn upload(&self, file: ImageFile) -> Result<String, ImageUploadError> {
        tokio::fs::create_dir_all(&self.upload_dir)
            .await
            .map_err(|e| storage_err("create upload dir", e))?;

        let stored_name = format!("{}-{}", Uuid::new_v4(), sanitize_file_name(&file.file_name));
        let path = self.upload_dir.join(&stored_name);

        tokio::fs::write(&path, &file.bytes)
            .await
            .map_err(|e| storage_err("write upload", e))?;

        debug!(
            file = %stored_name,
            size = file.bytes.len(),
            content_type = %file.content_type,
            "Stored uploaded image"
        );

        Ok(format!("{}/uploads/{}", self.public_base, stored_name))
    }

    async fn fetch(&self, stored_name: &str) -> Result<Option<StoredImage>, ImageUploadError> {
        // Only names this adapter produced; keeps lookups inside upload_dir
        if !STORED_NAME.is_match(stored_name) {
            return Ok(None);
        }

        match tokio::fs::read(self.upload_dir.join(stored_name)).await {
            Ok(bytes) => Ok(Some(StoredImage {
                content_type: content_type_for(stored_name).to_string(),
                bytes,
            })),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(storage_err("read upload", e)),
        }
    }
}

/// Keeps only the final path component, turns whitespace into `_` and drops
/// anything outside `[A-Za-z0-9._-]`.
pub fn sanitize_file_name(file_name: &str) -> String {
    let base = file_name
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or_default()
        .trim();

    let underscored = WHITESPACE.replace_all(base, "_");
    let cleaned = UNSAFE_CHARS.replace_all(&underscored, "");
    let cleaned = cleaned.trim_start_matches('.');

    if cleaned.is_empty() {
        "upload".to_string()
    } else {
        cleaned.to_string()
    }
}

fn content_type_for(stored_name: &str) -> &'static str {
    let ext = stored_name
        .rsplit('.')
        .next()
        .unwrap_or_default()
        .to_ascii_lowercase();

    match ext.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "webp" => "image/webp",
        "gif" => "image/gif",
        _ => "application/octet-stream",
    }
}

fn storage_err(action: &str, e: std::io::Error) -> ImageUploadError {
    error!(error = %e, "Failed to {}", action);
    ImageUploadError::StorageError(format!("{action}: {e}"))
}
