use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use tracing::error;

use crate::modules::achievement::application::ports::incoming::use_cases::{
    AchievementForm, SaveAchievementError,
};
use crate::modules::multimedia::adapter::incoming::web::multipart_form::ParsedForm;
use crate::shared::api::ApiResponse;

/// Multipart field carrying the image.
pub const IMAGE_FIELD: &str = "image";

/// Sent-but-blank fields stay `Some("")` so updates can clear them.
pub fn from_parsed(form: ParsedForm) -> AchievementForm {
    let field = |name: &str| form.texts.get(name).map(|v| v.trim().to_string());

    AchievementForm {
        title: field("title"),
        achievement_type: field("type"),
        date: field("date"),
        description: field("description"),
        category: field("category"),
        image: form.files.into_iter().next(),
    }
}

pub fn save_error_response(e: SaveAchievementError) -> HttpResponse {
    match e {
        SaveAchievementError::ValidationFailed(fields) => ApiResponse::missing_fields(&fields),
        e @ SaveAchievementError::InvalidDate(_) => {
            ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string())
        }
        SaveAchievementError::NotFound => {
            ApiResponse::not_found("ACHIEVEMENT_NOT_FOUND", "Achievement not found")
        }
        SaveAchievementError::UploadFailed(msg) => {
            error!("Achievement image upload failed: {}", msg);
            ApiResponse::error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "UPLOAD_FAILED",
                "Image upload failed",
            )
        }
        SaveAchievementError::RepositoryError(msg) => {
            error!("Repository error saving achievement: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
