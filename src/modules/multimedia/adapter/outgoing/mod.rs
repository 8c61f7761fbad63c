mod local_disk_uploader;

pub use local_disk_uploader::{sanitize_file_name, LocalDiskImageUploader};
