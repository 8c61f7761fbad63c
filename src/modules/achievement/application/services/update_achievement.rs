use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;

use super::{is_blank, non_blank, to_patch};
use crate::modules::achievement::application::ports::incoming::use_cases::{
    AchievementForm, SaveAchievementError, UpdateAchievementUseCase,
};
use crate::modules::achievement::application::ports::outgoing::{
    AchievementRepository, AchievementRepositoryError, UpdateAchievementData,
};
use crate::modules::achievement::domain::entities::{parse_achievement_date, Achievement};
use crate::modules::multimedia::application::ports::outgoing::ImageUploader;

pub struct UpdateAchievementService<R: AchievementRepository> {
    repository: R,
    uploader: Arc<dyn ImageUploader + Send + Sync>,
}

impl<R: AchievementRepository> UpdateAchievementService<R> {
    pub fn new(repository: R, uploader: Arc<dyn ImageUploader + Send + Sync>) -> Self {
        Self {
            repository,
            uploader,
        }
    }
}

fn map_repo_err(e: AchievementRepositoryError) -> SaveAchievementError {
    match e {
        AchievementRepositoryError::NotFound => SaveAchievementError::NotFound,
        other => SaveAchievementError::RepositoryError(other.to_string()),
    }
}

#[async_trait]
impl<R: AchievementRepository> UpdateAchievementUseCase for UpdateAchievementService<R> {
    async fn execute(
        &self,
        id: i32,
        form: AchievementForm,
    ) -> Result<Achievement, SaveAchievementError> {
        let mut blank = Vec::new();
        if is_blank(&form.title) {
            blank.push("title");
        }
        if is_blank(&form.date) {
            blank.push("date");
        }
        if !blank.is_empty() {
            return Err(SaveAchievementError::ValidationFailed(blank));
        }

        let date = match form.date {
            Some(raw) => Some(
                parse_achievement_date(&raw).ok_or(SaveAchievementError::InvalidDate(raw))?,
            ),
            None => None,
        };

        // Confirm the record exists before storing a new image for it
        self.repository.find(id).await.map_err(map_repo_err)?;

        let image_url = match form.image {
            Some(file) => Some(
                self.uploader
                    .upload(file)
                    .await
                    .map_err(|e| SaveAchievementError::UploadFailed(e.to_string()))?,
            ),
            None => None,
        };

        let updated = self
            .repository
            .update(
                id,
                UpdateAchievementData {
                    title: non_blank(form.title),
                    achievement_type: to_patch(form.achievement_type),
                    date,
                    description: to_patch(form.description),
                    category: to_patch(form.category),
                    image_url,
                },
            )
            .await
            .map_err(map_repo_err)?;

        info!(achievement_id = id, "Achievement updated");
        Ok(updated)
    }
}
