use async_trait::async_trait;

use crate::modules::project::application::ports::incoming::use_cases::{
    GetSingleProjectError, GetSingleProjectUseCase,
};
use crate::modules::project::application::ports::outgoing::project_query::{
    ProjectQuery, ProjectQueryError, ProjectView,
};
use crate::shared::lookup_key::LookupKey;

pub struct GetSingleProjectService<Q>
where
    Q: ProjectQuery,
{
    query: Q,
}

impl<Q> GetSingleProjectService<Q>
where
    Q: ProjectQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetSingleProjectUseCase for GetSingleProjectService<Q>
where
    Q: ProjectQuery + Send + Sync,
{
    async fn execute(&self, key: &LookupKey) -> Result<ProjectView, GetSingleProjectError> {
        self.query.get(key).await.map_err(|e| match e {
            ProjectQueryError::NotFound => GetSingleProjectError::NotFound,
            ProjectQueryError::DatabaseError(msg) => GetSingleProjectError::RepositoryError(msg),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::project::application::service::test_doubles::{
        sample_view, MockProjectQuery,
    };

    #[tokio::test]
    async fn test_found() {
        let query = MockProjectQuery {
            single: Ok(sample_view("shop")),
            ..Default::default()
        };

        let view = GetSingleProjectService::new(query)
            .execute(&LookupKey::parse("shop"))
            .await
            .unwrap();

        assert_eq!(view.project_id, "shop");
    }

    #[tokio::test]
    async fn test_not_found() {
        let result = GetSingleProjectService::new(MockProjectQuery::default())
            .execute(&LookupKey::parse("ghost"))
            .await;

        assert!(matches!(result, Err(GetSingleProjectError::NotFound)));
    }

    #[tokio::test]
    async fn test_database_error() {
        let query = MockProjectQuery {
            single: Err(ProjectQueryError::DatabaseError("timeout".to_string())),
            ..Default::default()
        };

        let result = GetSingleProjectService::new(query)
            .execute(&LookupKey::parse("shop"))
            .await;

        assert!(matches!(result, Err(GetSingleProjectError::RepositoryError(_))));
    }
}
