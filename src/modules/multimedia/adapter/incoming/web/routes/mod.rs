mod serve_upload;

pub use serve_upload::serve_upload_handler;
