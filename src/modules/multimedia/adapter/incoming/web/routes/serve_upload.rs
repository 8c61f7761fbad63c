use actix_web::{get, http::header, web, HttpResponse, Responder};
use tracing::error;

use crate::shared::api::ApiResponse;
use crate::AppState;

/// Serves images stored by the uploader at the URLs it handed out.
#[get("/uploads/{file_name}")]
pub async fn serve_upload_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let file_name = path.into_inner();

    match data.image_uploader.fetch(&file_name).await {
        Ok(Some(image)) => HttpResponse::Ok()
            .insert_header((header::CONTENT_TYPE, image.content_type))
            .insert_header((header::CACHE_CONTROL, "public, max-age=86400"))
            .body(image.bytes),
        Ok(None) => ApiResponse::not_found("UPLOAD_NOT_FOUND", "Upload not found"),
        Err(e) => {
            error!(file = %file_name, error = %e, "Failed to read upload");
            ApiResponse::internal_error()
        }
    }
}
