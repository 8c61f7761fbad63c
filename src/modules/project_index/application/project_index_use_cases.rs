use std::sync::Arc;

use crate::modules::project_index::application::use_cases::{
    ICreateProjectIndexUseCase, IDeleteProjectIndexUseCase, IFetchProjectIndexUseCase,
    IFetchProjectIndexesUseCase, IUpdateProjectIndexUseCase,
};

#[derive(Clone)]
pub struct ProjectIndexUseCases {
    pub list: Arc<dyn IFetchProjectIndexesUseCase + Send + Sync>,
    pub get: Arc<dyn IFetchProjectIndexUseCase + Send + Sync>,
    pub create: Arc<dyn ICreateProjectIndexUseCase + Send + Sync>,
    pub update: Arc<dyn IUpdateProjectIndexUseCase + Send + Sync>,
    pub delete: Arc<dyn IDeleteProjectIndexUseCase + Send + Sync>,
}
