mod create_project;
mod delete_project;
mod delete_project_detail;
mod get_project_detail;
mod get_projects;
mod get_single_project;
mod update_project;
mod upsert_project_detail;

pub use create_project::{CreateProjectError, CreateProjectUseCase};
pub use delete_project::{DeleteProjectError, DeleteProjectUseCase};
pub use delete_project_detail::{DeleteProjectDetailError, DeleteProjectDetailUseCase};
pub use get_project_detail::{GetProjectDetailError, GetProjectDetailUseCase};
pub use get_projects::{GetProjectsError, GetProjectsUseCase};
pub use get_single_project::{GetSingleProjectError, GetSingleProjectUseCase};
pub use update_project::{UpdateProjectError, UpdateProjectUseCase};
pub use upsert_project_detail::{UpsertProjectDetailError, UpsertProjectDetailUseCase};
