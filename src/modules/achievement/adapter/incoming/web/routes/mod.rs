mod create_achievement;
mod delete_achievement;
mod get_achievement;
mod get_achievements;
mod update_achievement;

// Globs carry the `__path_*` items generated for the OpenAPI document.
pub use create_achievement::*;
pub use delete_achievement::*;
pub use get_achievement::*;
pub use get_achievements::*;
pub use update_achievement::*;
