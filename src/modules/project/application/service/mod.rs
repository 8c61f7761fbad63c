mod create_project_service;
mod delete_project_detail_service;
mod delete_project_service;
mod get_project_detail_service;
mod get_projects_service;
mod get_single_project_service;
mod update_project_service;
mod upsert_project_detail_service;

#[cfg(test)]
pub(crate) mod test_doubles;

pub use create_project_service::CreateProjectService;
pub use delete_project_detail_service::DeleteProjectDetailService;
pub use delete_project_service::DeleteProjectService;
pub use get_project_detail_service::GetProjectDetailService;
pub use get_projects_service::GetProjectsService;
pub use get_single_project_service::GetSingleProjectService;
pub use update_project_service::UpdateProjectService;
pub use upsert_project_detail_service::UpsertProjectDetailService;
