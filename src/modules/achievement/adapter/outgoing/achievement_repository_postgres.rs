use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, QueryOrder, Set,
};
use std::sync::Arc;
use tracing::error;

use super::sea_orm_entity::{ActiveModel, Column, Entity, Model};
use crate::modules::achievement::application::ports::outgoing::{
    AchievementRepository, AchievementRepositoryError, CreateAchievementData,
    UpdateAchievementData,
};
use crate::modules::achievement::domain::entities::Achievement;

#[derive(Clone)]
pub struct AchievementRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl AchievementRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn require(&self, id: i32) -> Result<Model, AchievementRepositoryError> {
        Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(AchievementRepositoryError::NotFound)
    }
}

#[async_trait]
impl AchievementRepository for AchievementRepositoryPostgres {
    async fn list(&self) -> Result<Vec<Achievement>, AchievementRepositoryError> {
        let models = Entity::find()
            .order_by_desc(Column::Date)
            .order_by_desc(Column::Id)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(models.iter().map(Model::to_domain).collect())
    }

    async fn find(&self, id: i32) -> Result<Achievement, AchievementRepositoryError> {
        self.require(id).await.map(|m| m.to_domain())
    }

    async fn create(
        &self,
        data: CreateAchievementData,
    ) -> Result<Achievement, AchievementRepositoryError> {
        let now = Utc::now().fixed_offset();

        let model = ActiveModel {
            id: NotSet,
            title: Set(data.title),
            achievement_type: Set(data.achievement_type),
            date: Set(data.date.fixed_offset()),
            description: Set(data.description),
            category: Set(data.category),
            image_url: Set(data.image_url),
            created_at: Set(now),
            updated_at: Set(now),
        };

        model
            .insert(&*self.db)
            .await
            .map(|m| m.to_domain())
            .map_err(map_db_err)
    }

    async fn update(
        &self,
        id: i32,
        data: UpdateAchievementData,
    ) -> Result<Achievement, AchievementRepositoryError> {
        let existing = self.require(id).await?;
        let mut model = existing.clone().into_active_model();

        if let Some(title) = data.title {
            model.title = Set(title);
        }
        if let Some(value) = data.achievement_type.into_update() {
            model.achievement_type = Set(value);
        }
        if let Some(date) = data.date {
            model.date = Set(date.fixed_offset());
        }
        if let Some(value) = data.description.into_update() {
            model.description = Set(value);
        }
        if let Some(value) = data.category.into_update() {
            model.category = Set(value);
        }
        if let Some(url) = data.image_url {
            model.image_url = Set(Some(url));
        }

        if !model.is_changed() {
            return Ok(existing.to_domain());
        }

        model
            .update(&*self.db)
            .await
            .map(|m| m.to_domain())
            .map_err(map_db_err)
    }

    async fn delete(&self, id: i32) -> Result<(), AchievementRepositoryError> {
        let result = Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(AchievementRepositoryError::NotFound);
        }
        Ok(())
    }
}

fn map_db_err(e: DbErr) -> AchievementRepositoryError {
    error!(error = %e, "Achievement repository database error");
    AchievementRepositoryError::DatabaseError(e.to_string())
}
