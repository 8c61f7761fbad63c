use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::modules::achievement::domain::entities::Achievement;
use crate::shared::patch::PatchField;

#[derive(Debug, Clone, PartialEq)]
pub struct CreateAchievementData {
    pub title: String,
    pub achievement_type: Option<String>,
    pub date: DateTime<Utc>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub image_url: Option<String>,
}

/// `image_url: None` keeps the stored image.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateAchievementData {
    pub title: Option<String>,
    pub achievement_type: PatchField<String>,
    pub date: Option<DateTime<Utc>>,
    pub description: PatchField<String>,
    pub category: PatchField<String>,
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum AchievementRepositoryError {
    #[error("Achievement not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait AchievementRepository: Send + Sync {
    /// Most recent `date` first.
    async fn list(&self) -> Result<Vec<Achievement>, AchievementRepositoryError>;

    async fn find(&self, id: i32) -> Result<Achievement, AchievementRepositoryError>;

    async fn create(
        &self,
        data: CreateAchievementData,
    ) -> Result<Achievement, AchievementRepositoryError>;

    async fn update(
        &self,
        id: i32,
        data: UpdateAchievementData,
    ) -> Result<Achievement, AchievementRepositoryError>;

    async fn delete(&self, id: i32) -> Result<(), AchievementRepositoryError>;
}
