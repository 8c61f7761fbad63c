use async_trait::async_trait;
use std::fmt;

use crate::shared::lookup_key::LookupKey;

#[derive(Debug, Clone)]
pub enum DeleteProjectDetailError {
    ProjectNotFound,
    DetailNotFound,
    RepositoryError(String),
}

impl fmt::Display for DeleteProjectDetailError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeleteProjectDetailError::ProjectNotFound => write!(f, "project not found"),
            DeleteProjectDetailError::DetailNotFound => write!(f, "project detail not found"),
            DeleteProjectDetailError::RepositoryError(msg) => {
                write!(f, "repository error: {}", msg)
            }
        }
    }
}

#[async_trait]
pub trait DeleteProjectDetailUseCase: Send + Sync {
    async fn execute(&self, key: &LookupKey) -> Result<(), DeleteProjectDetailError>;
}
