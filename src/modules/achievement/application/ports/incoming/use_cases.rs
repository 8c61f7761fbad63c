use async_trait::async_trait;
use std::fmt;

use crate::modules::achievement::domain::entities::Achievement;
use crate::modules::multimedia::application::ports::outgoing::ImageFile;

/// Fields as submitted in the multipart form, trimmed.
///
/// `None` means the field was not sent; `Some("")` means it was sent blank,
/// which clears a nullable field on update.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AchievementForm {
    pub title: Option<String>,
    pub achievement_type: Option<String>,
    pub date: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub image: Option<ImageFile>,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub enum FetchAchievementsError {
    RepositoryError(String),
}

#[derive(Debug, Clone)]
pub enum FetchAchievementError {
    NotFound,
    RepositoryError(String),
}

/// Shared by create and update; `NotFound` only arises on update.
#[derive(Debug, Clone)]
pub enum SaveAchievementError {
    ValidationFailed(Vec<&'static str>),
    InvalidDate(String),
    NotFound,
    UploadFailed(String),
    RepositoryError(String),
}

#[derive(Debug, Clone)]
pub enum DeleteAchievementError {
    NotFound,
    RepositoryError(String),
}

impl fmt::Display for FetchAchievementsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchAchievementsError::RepositoryError(msg) => write!(f, "Repository error: {}", msg),
        }
    }
}

impl fmt::Display for FetchAchievementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchAchievementError::NotFound => write!(f, "Achievement not found"),
            FetchAchievementError::RepositoryError(msg) => write!(f, "Repository error: {}", msg),
        }
    }
}

impl fmt::Display for SaveAchievementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SaveAchievementError::ValidationFailed(fields) => {
                write!(f, "Missing required fields: {}", fields.join(", "))
            }
            SaveAchievementError::InvalidDate(raw) => write!(
                f,
                "Invalid date '{}': expected YYYY-MM-DD or an RFC 3339 timestamp",
                raw
            ),
            SaveAchievementError::NotFound => write!(f, "Achievement not found"),
            SaveAchievementError::UploadFailed(msg) => write!(f, "Image upload failed: {}", msg),
            SaveAchievementError::RepositoryError(msg) => write!(f, "Repository error: {}", msg),
        }
    }
}

impl fmt::Display for DeleteAchievementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeleteAchievementError::NotFound => write!(f, "Achievement not found"),
            DeleteAchievementError::RepositoryError(msg) => write!(f, "Repository error: {}", msg),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Use cases
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait FetchAchievementsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<Achievement>, FetchAchievementsError>;
}

#[async_trait]
pub trait FetchAchievementUseCase: Send + Sync {
    async fn execute(&self, id: i32) -> Result<Achievement, FetchAchievementError>;
}

/// Requires `title` and `date`; uploads the image only once the form is valid.
#[async_trait]
pub trait CreateAchievementUseCase: Send + Sync {
    async fn execute(&self, form: AchievementForm) -> Result<Achievement, SaveAchievementError>;
}

/// Unsent fields are kept, including the image.
#[async_trait]
pub trait UpdateAchievementUseCase: Send + Sync {
    async fn execute(
        &self,
        id: i32,
        form: AchievementForm,
    ) -> Result<Achievement, SaveAchievementError>;
}

#[async_trait]
pub trait DeleteAchievementUseCase: Send + Sync {
    async fn execute(&self, id: i32) -> Result<(), DeleteAchievementError>;
}
