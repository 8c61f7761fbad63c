use async_trait::async_trait;
use std::fmt;

use crate::modules::project::application::ports::outgoing::project_repository::{
    UpsertProjectDetailData, UpsertedProjectDetail,
};
use crate::shared::lookup_key::LookupKey;

#[derive(Debug, Clone)]
pub enum UpsertProjectDetailError {
    ProjectNotFound,
    RepositoryError(String),
}

impl fmt::Display for UpsertProjectDetailError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpsertProjectDetailError::ProjectNotFound => write!(f, "project not found"),
            UpsertProjectDetailError::RepositoryError(msg) => {
                write!(f, "repository error: {}", msg)
            }
        }
    }
}

#[async_trait]
pub trait UpsertProjectDetailUseCase: Send + Sync {
    async fn execute(
        &self,
        key: &LookupKey,
        data: UpsertProjectDetailData,
    ) -> Result<UpsertedProjectDetail, UpsertProjectDetailError>;
}
