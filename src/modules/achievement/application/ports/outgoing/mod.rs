pub mod achievement_repository;

pub use achievement_repository::{
    AchievementRepository, AchievementRepositoryError, CreateAchievementData,
    UpdateAchievementData,
};
