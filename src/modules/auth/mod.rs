//! API-key gate for mutating routes.
pub mod adapter;
pub mod application;
