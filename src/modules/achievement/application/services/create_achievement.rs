use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, warn};

use super::{is_blank, non_blank};
use crate::modules::achievement::application::ports::incoming::use_cases::{
    AchievementForm, CreateAchievementUseCase, SaveAchievementError,
};
use crate::modules::achievement::application::ports::outgoing::{
    AchievementRepository, CreateAchievementData,
};
use crate::modules::achievement::domain::entities::{parse_achievement_date, Achievement};
use crate::modules::multimedia::application::ports::outgoing::ImageUploader;

pub struct CreateAchievementService<R: AchievementRepository> {
    repository: R,
    uploader: Arc<dyn ImageUploader + Send + Sync>,
}

impl<R: AchievementRepository> CreateAchievementService<R> {
    pub fn new(repository: R, uploader: Arc<dyn ImageUploader + Send + Sync>) -> Self {
        Self {
            repository,
            uploader,
        }
    }
}

#[async_trait]
impl<R: AchievementRepository> CreateAchievementUseCase for CreateAchievementService<R> {
    async fn execute(&self, form: AchievementForm) -> Result<Achievement, SaveAchievementError> {
        let mut missing = Vec::new();
        if form.title.is_none() || is_blank(&form.title) {
            missing.push("title");
        }
        if form.date.is_none() || is_blank(&form.date) {
            missing.push("date");
        }
        if !missing.is_empty() {
            warn!(fields = ?missing, "Rejected achievement without required fields");
            return Err(SaveAchievementError::ValidationFailed(missing));
        }

        let title = form.title.unwrap_or_default();
        let raw_date = form.date.unwrap_or_default();
        let date = parse_achievement_date(&raw_date)
            .ok_or(SaveAchievementError::InvalidDate(raw_date))?;

        let image_url = match form.image {
            Some(file) => Some(
                self.uploader
                    .upload(file)
                    .await
                    .map_err(|e| SaveAchievementError::UploadFailed(e.to_string()))?,
            ),
            None => None,
        };

        let created = self
            .repository
            .create(CreateAchievementData {
                title,
                achievement_type: non_blank(form.achievement_type),
                date,
                description: non_blank(form.description),
                category: non_blank(form.category),
                image_url,
            })
            .await
            .map_err(|e| SaveAchievementError::RepositoryError(e.to_string()))?;

        info!(achievement_id = created.id, "Achievement created");
        Ok(created)
    }
}
