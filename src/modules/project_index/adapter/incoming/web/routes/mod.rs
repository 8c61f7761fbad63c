mod create_project_index;
mod delete_project_index;
mod get_project_index;
mod get_project_indexes;
mod update_project_index;

// Globs carry the `__path_*` items generated for the OpenAPI document.
pub use create_project_index::*;
pub use delete_project_index::*;
pub use get_project_index::*;
pub use get_project_indexes::*;
pub use update_project_index::*;
