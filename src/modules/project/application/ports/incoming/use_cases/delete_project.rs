use async_trait::async_trait;
use std::fmt;

use crate::shared::lookup_key::LookupKey;

#[derive(Debug, Clone)]
pub enum DeleteProjectError {
    NotFound,
    RepositoryError(String),
}

impl fmt::Display for DeleteProjectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeleteProjectError::NotFound => write!(f, "project not found"),
            DeleteProjectError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

/// Removes the project with its children and detail.
#[async_trait]
pub trait DeleteProjectUseCase: Send + Sync {
    async fn execute(&self, key: &LookupKey) -> Result<(), DeleteProjectError>;
}
