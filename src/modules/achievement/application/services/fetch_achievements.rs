use async_trait::async_trait;

use crate::modules::achievement::application::ports::incoming::use_cases::{
    FetchAchievementsError, FetchAchievementsUseCase,
};
use crate::modules::achievement::application::ports::outgoing::AchievementRepository;
use crate::modules::achievement::domain::entities::Achievement;

pub struct FetchAchievementsService<R: AchievementRepository> {
    repository: R,
}

impl<R: AchievementRepository> FetchAchievementsService<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R: AchievementRepository> FetchAchievementsUseCase for FetchAchievementsService<R> {
    async fn execute(&self) -> Result<Vec<Achievement>, FetchAchievementsError> {
        self.repository
            .list()
            .await
            .map_err(|e| FetchAchievementsError::RepositoryError(e.to_string()))
    }
}
