use actix_multipart::Multipart;
use actix_web::{post, web, HttpResponse, Responder};
use serde_json::Value;
use tracing::{error, info};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::adapter::incoming::web::extractors::AdminKey;
use crate::modules::multimedia::adapter::incoming::web::multipart_form::{
    read_form, upload_all, ParsedForm,
};
use crate::modules::multimedia::application::domain::policies::UploadPolicy;
use crate::modules::project::application::ports::incoming::use_cases::UpsertProjectDetailError;
use crate::modules::project::application::ports::outgoing::project_query::{
    Flowchart, ProjectDetailView,
};
use crate::modules::project::application::ports::outgoing::project_repository::UpsertProjectDetailData;
use crate::shared::api::ApiResponse;
use crate::shared::json_text;
use crate::shared::lookup_key::LookupKey;
use crate::AppState;

/// Multipart form: `images` (files), `flowchart_code`, `flowchart_description`
/// and optionally `project_images`, a JSON list of URLs used when no files are
/// attached. Without either, stored images are kept.
#[utoipa::path(
    post,
    path = "/api/projects/{project_id}/detail",
    tag = "project-details",
    params(("project_id" = String, Path, description = "Business key of the project")),
    request_body(content_type = "multipart/form-data", description = "images[], flowchart_code, flowchart_description, project_images"),
    security(("ApiKeyAuth" = [])),
    responses(
        (status = 201, description = "Detail created", body = inline(SuccessResponse<ProjectDetailView>)),
        (status = 200, description = "Detail updated", body = inline(SuccessResponse<ProjectDetailView>)),
        (status = 400, description = "Malformed form", body = ErrorResponse),
        (status = 401, description = "Missing or invalid API key", body = ErrorResponse),
        (status = 404, description = "Project not found", body = ErrorResponse),
        (status = 413, description = "Image too large", body = ErrorResponse),
        (status = 415, description = "Not an image", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[post("/api/projects/{project_id}/detail")]
pub async fn upsert_project_detail_handler(
    _key: AdminKey,
    path: web::Path<String>,
    payload: Multipart,
    data: web::Data<AppState>,
) -> impl Responder {
    let key = LookupKey::project_id(&path.into_inner());

    let mut form = match read_form(payload, "images", &UploadPolicy::project_images()).await {
        Ok(form) => form,
        Err(e) => return e.into_response(),
    };

    let project_images = match resolve_images(&mut form, &data).await {
        Ok(images) => images,
        Err(resp) => return resp,
    };

    let upsert = UpsertProjectDetailData {
        project_images,
        project_flowchart: Flowchart {
            mermaid_code: form.text("flowchart_code").unwrap_or_default(),
            description: form.text("flowchart_description").unwrap_or_default(),
        },
    };

    match data.project.upsert_detail.execute(&key, upsert).await {
        Ok(result) if result.created => {
            info!(project = %key, "Project detail created");
            ApiResponse::created(result.detail)
        }
        Ok(result) => ApiResponse::success(result.detail),

        Err(UpsertProjectDetailError::ProjectNotFound) => {
            ApiResponse::not_found("PROJECT_NOT_FOUND", "Project not found")
        }

        Err(UpsertProjectDetailError::RepositoryError(e)) => {
            error!("Repository error saving detail of {}: {}", key, e);
            ApiResponse::internal_error()
        }
    }
}

/// Uploaded files win over the `project_images` field; neither means keep.
async fn resolve_images(
    form: &mut ParsedForm,
    data: &web::Data<AppState>,
) -> Result<Option<Vec<String>>, HttpResponse> {
    if !form.files.is_empty() {
        return upload_all(data.image_uploader.as_ref(), std::mem::take(&mut form.files))
            .await
            .map(Some)
            .map_err(|_| ApiResponse::internal_error());
    }

    match form.text("project_images") {
        None => Ok(None),
        Some(raw) => json_text::normalize::<Vec<String>>(Value::String(raw))
            .map(Some)
            .map_err(|_| {
                ApiResponse::bad_request(
                    "VALIDATION_ERROR",
                    "project_images must be a JSON list of URLs",
                )
            }),
    }
}
