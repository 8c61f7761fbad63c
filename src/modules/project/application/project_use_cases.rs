use std::sync::Arc;

use crate::modules::project::application::ports::incoming::use_cases::{
    CreateProjectUseCase, DeleteProjectDetailUseCase, DeleteProjectUseCase,
    GetProjectDetailUseCase, GetProjectsUseCase, GetSingleProjectUseCase, UpdateProjectUseCase,
    UpsertProjectDetailUseCase,
};

#[derive(Clone)]
pub struct ProjectUseCases {
    pub create: Arc<dyn CreateProjectUseCase + Send + Sync>,
    pub get_list: Arc<dyn GetProjectsUseCase + Send + Sync>,
    pub get_single: Arc<dyn GetSingleProjectUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateProjectUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteProjectUseCase + Send + Sync>,
    pub get_detail: Arc<dyn GetProjectDetailUseCase + Send + Sync>,
    pub upsert_detail: Arc<dyn UpsertProjectDetailUseCase + Send + Sync>,
    pub delete_detail: Arc<dyn DeleteProjectDetailUseCase + Send + Sync>,
}
