use async_trait::async_trait;

use crate::modules::project::application::ports::incoming::use_cases::{
    GetProjectsError, GetProjectsUseCase,
};
use crate::modules::project::application::ports::outgoing::project_query::{
    ProjectQuery, ProjectQueryError, ProjectView,
};

pub struct GetProjectsService<Q>
where
    Q: ProjectQuery,
{
    query: Q,
}

impl<Q> GetProjectsService<Q>
where
    Q: ProjectQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetProjectsUseCase for GetProjectsService<Q>
where
    Q: ProjectQuery + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<ProjectView>, GetProjectsError> {
        self.query.list().await.map_err(|e| match e {
            ProjectQueryError::DatabaseError(msg) => GetProjectsError::RepositoryError(msg),
            ProjectQueryError::NotFound => {
                GetProjectsError::RepositoryError("unexpected not found while listing".to_string())
            }
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
    async fn test_returns_all_projects() {
        let query = MockProjectQuery {
            list: Ok(vec![sample_view("a"), sample_view("b")]),
            ..Default::default()
        };

        let projects = GetProjectsService::new(query).execute().await.unwrap();

        assert_eq!(projects.len(), 2);
        assert_eq!(projects[1].project_id, "b");
    }

    #[tokio::test]
    async fn test_maps_database_error() {
        let query = MockProjectQuery {
            list: Err(ProjectQueryError::DatabaseError("down".to_string())),
            ..Default::default()
        };

        let result = GetProjectsService::new(query).execute().await;

        assert!(matches!(result, Err(GetProjectsError::RepositoryError(msg)) if msg == "down"));
    }
}
