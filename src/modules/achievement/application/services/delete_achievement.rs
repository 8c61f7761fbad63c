use async_trait::async_trait;
use tracing::info;

use crate::modules::achievement::application::ports::incoming::use_cases::{
    DeleteAchievementError, DeleteAchievementUseCase,
};
use crate::modules::achievement::application::ports::outgoing::{
    AchievementRepository, AchievementRepositoryError,
};

/// Removes the record only; the uploaded image stays on disk.
pub struct DeleteAchievementService<R: AchievementRepository> {
    repository: R,
}

impl<R: AchievementRepository> DeleteAchievementService<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R: AchievementRepository> DeleteAchievementUseCase for DeleteAchievementService<R> {
    async fn execute(&self, id: i32) -> Result<(), DeleteAchievementError> {
        self.repository.delete(id).await.map_err(|e| match e {
            AchievementRepositoryError::NotFound => DeleteAchievementError::NotFound,
            other => DeleteAchievementError::RepositoryError(other.to_string()),
        })?;

        info!(achievement_id = id, "Achievement deleted");
        Ok(())
    }
}
