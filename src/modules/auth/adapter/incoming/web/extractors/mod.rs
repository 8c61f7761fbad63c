pub mod admin_key;

pub use admin_key::{AdminKey, API_KEY_HEADER};
