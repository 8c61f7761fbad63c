pub mod achievement;
pub mod auth;
pub mod multimedia;
pub mod project;
pub mod project_index;
