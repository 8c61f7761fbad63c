pub mod image_uploader;

pub use image_uploader::{ImageFile, ImageUploadError, ImageUploader, StoredImage};
