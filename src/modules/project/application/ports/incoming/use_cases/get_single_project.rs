use async_trait::async_trait;
use std::fmt;

use crate::modules::project::application::ports::outgoing::project_query::ProjectView;
use crate::shared::lookup_key::LookupKey;

#[derive(Debug, Clone)]
pub enum GetSingleProjectError {
    NotFound,
    RepositoryError(String),
}

impl fmt::Display for GetSingleProjectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GetSingleProjectError::NotFound => write!(f, "project not found"),
            GetSingleProjectError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

/// Key is the internal UUID or the `project_id` business key.
#[async_trait]
pub trait GetSingleProjectUseCase: Send + Sync {
    async fn execute(&self, key: &LookupKey) -> Result<ProjectView, GetSingleProjectError>;
}
