use async_trait::async_trait;
use std::fmt;

use crate::modules::project::application::ports::outgoing::project_query::ProjectView;
use crate::modules::project::application::ports::outgoing::project_repository::UpdateProjectData;
use crate::shared::lookup_key::LookupKey;

#[derive(Debug, Clone)]
pub enum UpdateProjectError {
    /// A required field was sent blank.
    ValidationFailed(Vec<&'static str>),
    NotFound,
    RepositoryError(String),
}

impl fmt::Display for UpdateProjectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpdateProjectError::ValidationFailed(fields) => {
                write!(f, "required fields cannot be blank: {}", fields.join(", "))
            }
            UpdateProjectError::NotFound => write!(f, "project not found"),
            UpdateProjectError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

#[async_trait]
pub trait UpdateProjectUseCase: Send + Sync {
    async fn execute(
        &self,
        key: &LookupKey,
        data: UpdateProjectData,
    ) -> Result<ProjectView, UpdateProjectError>;
}
