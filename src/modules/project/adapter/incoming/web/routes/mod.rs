mod create_project;
mod delete_project;
mod delete_project_detail;
mod get_project_detail;
mod get_projects;
mod get_single_project;
mod update_project;
mod upsert_project_detail;

// Globs carry the `__path_*` items generated for the OpenAPI document.
pub use create_project::*;
pub use delete_project::*;
pub use delete_project_detail::*;
pub use get_project_detail::*;
pub use get_projects::*;
pub use get_single_project::*;
pub use update_project::*;
pub use upsert_project_detail::*;
