// src/modules/project/adapter/outgoing/project_query_postgres.rs

use async_trait::async_trait;
use sea_orm::{DatabaseConnection, DbErr, EntityTrait, QueryOrder};
use std::sync::Arc;

use crate::modules::project::adapter::outgoing::project_rows::{
    detail_view, find_detail, find_project, load_views,
};
use crate::modules::project::adapter::outgoing::sea_orm_entity::projects::{Column, Entity};
use crate::modules::project::application::ports::outgoing::project_query::{
    ProjectDetailView, ProjectQuery, ProjectQueryError, ProjectView,
};
use crate::shared::lookup_key::LookupKey;

// ============================================================================
// Repository Implementation
// ============================================================================

#[derive(Clone)]
pub struct ProjectQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProjectQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProjectQuery for ProjectQueryPostgres {
    async fn list(&self) -> Result<Vec<ProjectView>, ProjectQueryError> {
        let parents = Entity::find()
            .order_by_asc(Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        load_views(&*self.db, parents).await.map_err(map_db_err)
    }

    async fn get(&self, key: &LookupKey) -> Result<ProjectView, ProjectQueryError> {
        let parent = find_project(&*self.db, key)
            .await
            .map_err(map_db_err)?
            .ok_or(ProjectQueryError::NotFound)?;

        load_views(&*self.db, vec![parent])
            .await
            .map_err(map_db_err)?
            .into_iter()
            .next()
            .ok_or(ProjectQueryError::NotFound)
    }

    async fn get_detail(&self, key: &LookupKey) -> Result<ProjectDetailView, ProjectQueryError> {
        let parent = find_project(&*self.db, key)
            .await
            .map_err(map_db_err)?
            .ok_or(ProjectQueryError::NotFound)?;

        let detail = find_detail(&*self.db, parent.id)
            .await
            .map_err(map_db_err)?;

        Ok(detail_view(&parent, detail.as_ref()))
    }
}

fn map_db_err(e: DbErr) -> ProjectQueryError {
    ProjectQueryError::DatabaseError(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================
