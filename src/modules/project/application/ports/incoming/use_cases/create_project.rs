use async_trait::async_trait;
use std::fmt;

use crate::modules::project::application::ports::outgoing::project_query::ProjectView;
use crate::modules::project::application::ports::outgoing::project_repository::CreateProjectData;

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub enum CreateProjectError {
    /// Names of every required field that was missing or blank.
    ValidationFailed(Vec<&'static str>),
    ProjectIdAlreadyExists,
    RepositoryError(String),
}

impl fmt::Display for CreateProjectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CreateProjectError::ValidationFailed(fields) => {
                write!(f, "missing required fields: {}", fields.join(", "))
            }
            CreateProjectError::ProjectIdAlreadyExists => write!(f, "project id already exists"),
            CreateProjectError::RepositoryError(msg) => {
                write!(f, "repository error: {}", msg)
            }
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Use case trait
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait CreateProjectUseCase: Send + Sync {
    async fn execute(&self, data: CreateProjectData) -> Result<ProjectView, CreateProjectError>;
}
