use async_trait::async_trait;

use crate::modules::project::application::ports::incoming::use_cases::{
    GetProjectDetailError, GetProjectDetailUseCase,
};
use crate::modules::project::application::ports::outgoing::project_query::{
    ProjectDetailView, ProjectQuery, ProjectQueryError,
};
use crate::shared::lookup_key::LookupKey;

pub struct GetProjectDetailService<Q>
where
    Q: ProjectQuery,
{
    query: Q,
}

impl<Q> GetProjectDetailService<Q>
where
    Q: ProjectQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetProjectDetailUseCase for GetProjectDetailService<Q>
where
    Q: ProjectQuery + Send + Sync,
{
    async fn execute(&self, key: &LookupKey) -> Result<ProjectDetailView, GetProjectDetailError> {
        self.query.get_detail(key).await.map_err(|e| match e {
            ProjectQueryError::NotFound => GetProjectDetailError::ProjectNotFound,
            ProjectQueryError::DatabaseError(msg) => GetProjectDetailError::RepositoryError(msg),
        })
    }
}
