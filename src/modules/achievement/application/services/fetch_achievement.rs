use async_trait::async_trait;

use crate::modules::achievement::application::ports::incoming::use_cases::{
    FetchAchievementError, FetchAchievementUseCase,
};
use crate::modules::achievement::application::ports::outgoing::{
    AchievementRepository, AchievementRepositoryError,
};
use crate::modules::achievement::domain::entities::Achievement;

pub struct FetchAchievementService<R: AchievementRepository> {
    repository: R,
}

impl<R: AchievementRepository> FetchAchievementService<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R: AchievementRepository> FetchAchievementUseCase for FetchAchievementService<R> {
    async fn execute(&self, id: i32) -> Result<Achievement, FetchAchievementError> {
        self.repository.find(id).await.map_err(|e| match e {
            AchievementRepositoryError::NotFound => FetchAchievementError::NotFound,
            other => FetchAchievementError::RepositoryError(other.to_string()),
        })
    }
}
