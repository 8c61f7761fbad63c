use async_trait::async_trait;
use std::fmt;

use crate::modules::project::application::ports::outgoing::project_query::ProjectDetailView;
use crate::shared::lookup_key::LookupKey;

#[derive(Debug, Clone)]
pub enum GetProjectDetailError {
    ProjectNotFound,
    RepositoryError(String),
}

impl fmt::Display for GetProjectDetailError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GetProjectDetailError::ProjectNotFound => write!(f, "project not found"),
            GetProjectDetailError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

#[async_trait]
pub trait GetProjectDetailUseCase: Send + Sync {
    async fn execute(&self, key: &LookupKey) -> Result<ProjectDetailView, GetProjectDetailError>;
}
