use std::sync::Arc;

use crate::modules::achievement::application::ports::incoming::use_cases::{
    CreateAchievementUseCase, DeleteAchievementUseCase, FetchAchievementUseCase,
    FetchAchievementsUseCase, UpdateAchievementUseCase,
};

#[derive(Clone)]
pub struct AchievementUseCases {
    pub list: Arc<dyn FetchAchievementsUseCase + Send + Sync>,
    pub get: Arc<dyn FetchAchievementUseCase + Send + Sync>,
    pub create: Arc<dyn CreateAchievementUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateAchievementUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteAchievementUseCase + Send + Sync>,
}
