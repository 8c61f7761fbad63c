use async_trait::async_trait;
use std::fmt;

use crate::modules::project_index::application::ports::outgoing::{
    ProjectIndexRepository, ProjectIndexRepositoryError,
};
use crate::shared::lookup_key::LookupKey;

#[derive(Debug, Clone)]
pub enum DeleteProjectIndexError {
    NotFound,
    RepositoryError(String),
}

impl fmt::Display for DeleteProjectIndexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeleteProjectIndexError::NotFound => write!(f, "Project index not found"),
            DeleteProjectIndexError::RepositoryError(msg) => write!(f, "Repository error: {}", msg),
        }
    }
}

#[async_trait]
pub trait IDeleteProjectIndexUseCase: Send + Sync {
    async fn execute(&self, key: &LookupKey) -> Result<(), DeleteProjectIndexError>;
}

pub struct DeleteProjectIndexUseCase<R: ProjectIndexRepository> {
    repository: R,
}

impl<R: ProjectIndexRepository> DeleteProjectIndexUseCase<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> IDeleteProjectIndexUseCase for DeleteProjectIndexUseCase<R>
where
    R: ProjectIndexRepository + Send + Sync,
{
    async fn execute(&self, key: &LookupKey) -> Result<(), DeleteProjectIndexError> {
        self.repository.delete(key).await.map_err(|e| match e {
            ProjectIndexRepositoryError::NotFound => DeleteProjectIndexError::NotFound,
            other => DeleteProjectIndexError::RepositoryError(other.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::project_index::application::use_cases::test_doubles::{
        sample_index, MockProjectIndexRepository,
    };

    #[tokio::test]
    async fn test_delete_ok() {
        let uc = DeleteProjectIndexUseCase::new(MockProjectIndexRepository::returning(Ok(
            sample_index("shop"),
        )));

        assert!(uc
            .execute(&LookupKey::ProjectId("shop".to_string()))
            .await
            .is_ok());
    }

    #[tokio::test]
    async fn test_delete_database_error() {
        let uc = DeleteProjectIndexUseCase::new(MockProjectIndexRepository::returning(Err(
            ProjectIndexRepositoryError::DatabaseError("locked".to_string()),
        )));

        let result = uc.execute(&LookupKey::ProjectId("shop".to_string())).await;
        assert!(matches!(
            result,
            Err(DeleteProjectIndexError::RepositoryError(_))
        ));
    }
}
