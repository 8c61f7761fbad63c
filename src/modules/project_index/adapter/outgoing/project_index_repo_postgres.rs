use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder, Set, SqlErr,
};
use std::sync::Arc;
use tracing::{error, info};
use uuid::Uuid;

use super::sea_orm_entity::{ActiveModel, Column, Entity, Model};
use crate::modules::project_index::application::ports::outgoing::{
    CreateProjectIndexData, ProjectIndexRepository, ProjectIndexRepositoryError,
    UpdateProjectIndexData,
};
use crate::modules::project_index::domain::entities::ProjectIndex;
use crate::shared::json_text;
use crate::shared::lookup_key::LookupKey;

#[derive(Clone)]
pub struct ProjectIndexRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProjectIndexRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProjectIndexRepository for ProjectIndexRepositoryPostgres {
    async fn list(&self) -> Result<Vec<ProjectIndex>, ProjectIndexRepositoryError> {
        let models = Entity::find()
            .order_by_asc(Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(models.iter().map(Model::to_domain).collect())
    }

    async fn find(&self, key: &LookupKey) -> Result<ProjectIndex, ProjectIndexRepositoryError> {
        require(&*self.db, key).await.map(|m| m.to_domain())
    }

    async fn create(
        &self,
        data: CreateProjectIndexData,
    ) -> Result<ProjectIndex, ProjectIndexRepositoryError> {
        let now = Utc::now().fixed_offset();

        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            project_id: Set(data.project_id),
            project_title: Set(data.project_title),
            project_subtitle: Set(data.project_subtitle),
            project_cover_img: Set(data.project_cover_img),
            project_tech_stacks: Set(to_text(&data.project_tech_stacks)?),
            project_link: Set(data.project_link),
            github_link: Set(data.github_link),
            project_status: Set(data.project_status),
            personal: Set(data.personal),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let created = model
            .insert(&*self.db)
            .await
            .map_err(map_project_id_error)?;

        info!(project_id = %created.project_id, "Project index created");
        Ok(created.to_domain())
    }

    async fn update(
        &self,
        key: &LookupKey,
        data: UpdateProjectIndexData,
    ) -> Result<ProjectIndex, ProjectIndexRepositoryError> {
        let existing = require(&*self.db, key).await?;
        let mut model = existing.clone().into_active_model();

        if let Some(title) = data.project_title {
            model.project_title = Set(title);
        }
        if let Some(value) = data.project_subtitle.into_update() {
            model.project_subtitle = Set(value);
        }
        if let Some(value) = data.project_cover_img.into_update() {
            model.project_cover_img = Set(value);
        }
        if let Some(stacks) = data.project_tech_stacks {
            model.project_tech_stacks = Set(to_text(&stacks)?);
        }
        if let Some(value) = data.project_link.into_update() {
            model.project_link = Set(value);
        }
        if let Some(value) = data.github_link.into_update() {
            model.github_link = Set(value);
        }
        if let Some(value) = data.project_status.into_update() {
            model.project_status = Set(value);
        }
        if let Some(personal) = data.personal {
            model.personal = Set(personal);
        }

        if !model.is_changed() {
            return Ok(existing.to_domain());
        }

        model.updated_at = Set(Utc::now().fixed_offset());
        let updated = model.update(&*self.db).await.map_err(map_db_err)?;

        Ok(updated.to_domain())
    }

    async fn delete(&self, key: &LookupKey) -> Result<(), ProjectIndexRepositoryError> {
        let existing = require(&*self.db, key).await?;

        let result = Entity::delete_by_id(existing.id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(ProjectIndexRepositoryError::NotFound);
        }

        info!(project_id = %existing.project_id, "Project index deleted");
        Ok(())
    }
}

async fn require<C: ConnectionTrait>(
    conn: &C,
    key: &LookupKey,
) -> Result<Model, ProjectIndexRepositoryError> {
    let found = match key {
        LookupKey::Id(id) => match Entity::find_by_id(*id).one(conn).await.map_err(map_db_err)? {
            Some(found) => Some(found),
            // business keys may be UUID-shaped
            None => by_project_id(conn, &id.to_string()).await?,
        },
        LookupKey::ProjectId(project_id) => by_project_id(conn, project_id).await?,
    };

    found.ok_or(ProjectIndexRepositoryError::NotFound)
}

async fn by_project_id<C: ConnectionTrait>(
    conn: &C,
    project_id: &str,
) -> Result<Option<Model>, ProjectIndexRepositoryError> {
    Entity::find()
        .filter(Column::ProjectId.eq(project_id))
        .one(conn)
        .await
        .map_err(map_db_err)
}

fn to_text<T: serde::Serialize>(value: &T) -> Result<String, ProjectIndexRepositoryError> {
    json_text::encode(value)
        .map_err(|e| ProjectIndexRepositoryError::SerializationError(e.to_string()))
}

fn map_project_id_error(e: DbErr) -> ProjectIndexRepositoryError {
    if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) {
        return ProjectIndexRepositoryError::ProjectIdAlreadyExists;
    }

    let msg = e.to_string().to_lowercase();

    if (msg.contains("duplicate") || msg.contains("unique") || msg.contains("23505"))
        && msg.contains("project_id")
    {
        ProjectIndexRepositoryError::ProjectIdAlreadyExists
    } else {
        map_db_err(e)
    }
}

fn map_db_err(e: DbErr) -> ProjectIndexRepositoryError {
    error!(error = %e, "Project index repository database error");
    ProjectIndexRepositoryError::DatabaseError(e.to_string())
}
