use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use std::sync::Mutex;

use crate::modules::achievement::application::ports::outgoing::{
    AchievementRepository, AchievementRepositoryError, CreateAchievementData,
    UpdateAchievementData,
};
use crate::modules::achievement::domain::entities::Achievement;

pub fn sample_achievement(id: i32) -> Achievement {
    let at = Utc.with_ymd_and_hms(2024, 3, 15, 0, 0, 0).unwrap();
    Achievement {
        id,
        title: "Hackathon winner".to_string(),
        achievement_type: Some("award".to_string()),
        date: at,
        description: None,
        category: Some("competition".to_string()),
        image_url: None,
        created_at: at,
        updated_at: at,
    }
}

/// Answers every call with `result`, recording writes.
pub struct MockAchievementRepository {
    pub result: Result<Achievement, AchievementRepositoryError>,
    pub created_with: Mutex<Option<CreateAchievementData>>,
    pub updated_with: Mutex<Option<UpdateAchievementData>>,
}

impl MockAchievementRepository {
    pub fn returning(result: Result<Achievement, AchievementRepositoryError>) -> Self {
        Self {
            result,
            created_with: Mutex::new(None),
            updated_with: Mutex::new(None),
        }
    }

    pub fn wrote_anything(&self) -> bool {
        self.created_with.lock().unwrap().is_some() || self.updated_with.lock().unwrap().is_some()
    }
}

#[async_trait]
impl AchievementRepository for MockAchievementRepository {
    async fn list(&self) -> Result<Vec<Achievement>, AchievementRepositoryError> {
        self.result.clone().map(|a| vec![a])
    }

    async fn find(&self, _id: i32) -> Result<Achievement, AchievementRepositoryError> {
        self.result.clone()
    }

    async fn create(
        &self,
        data: CreateAchievementData,
    ) -> Result<Achievement, AchievementRepositoryError> {
        *self.created_with.lock().unwrap() = Some(data);
        self.result.clone()
    }

    async fn update(
        &self,
        _id: i32,
        data: UpdateAchievementData,
    ) -> Result<Achievement, AchievementRepositoryError> {
        *self.updated_with.lock().unwrap() = Some(data);
        self.result.clone()
    }

    async fn delete(&self, _id: i32) -> Result<(), AchievementRepositoryError> {
        self.result.clone().map(|_| ())
    }
}
