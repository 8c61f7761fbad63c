use async_trait::async_trait;

/// One uploaded file, already read into memory and checked against policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageFile {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// A previously stored image, as served back to clients.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredImage {
    pub content_type: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ImageUploadError {
    #[error("Image storage error: {0}")]
    StorageError(String),
}

/// Stores images and hands back a publicly fetchable URL.
///
/// Records only ever see the returned URL string.
#[async_trait]
pub trait ImageUploader: Send + Sync {
    async fn upload(&self, file: ImageFile) -> Result<String, ImageUploadError>;

    /// `Ok(None)` when no stored image has that name.
    async fn fetch(&self, stored_name: &str) -> Result<Option<StoredImage>, ImageUploadError>;
}
