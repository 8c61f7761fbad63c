pub mod api;
pub mod config;
pub mod json_text;
pub mod lookup_key;
pub mod patch;
