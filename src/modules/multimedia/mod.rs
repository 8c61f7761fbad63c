//! Image upload: policy, uploader port, local-disk adapter, multipart parsing.
pub mod adapter;
pub mod application;
