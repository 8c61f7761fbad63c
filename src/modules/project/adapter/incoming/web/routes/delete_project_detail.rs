use actix_web::{delete, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, MessageResponse};
use crate::modules::auth::adapter::incoming::web::extractors::AdminKey;
use crate::modules::project::application::ports::incoming::use_cases::DeleteProjectDetailError;
use crate::shared::api::ApiResponse;
use crate::shared::lookup_key::LookupKey;
use crate::AppState;

#[utoipa::path(
    delete,
    path = "/api/projects/{project_id}/detail",
    tag = "project-details",
    params(("project_id" = String, Path, description = "Business key of the project")),
    security(("ApiKeyAuth" = [])),
    responses(
        (status = 200, description = "Detail deleted and is_details cleared", body = MessageResponse),
        (status = 401, description = "Missing or invalid API key", body = ErrorResponse),
        (status = 404, description = "Project or detail not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[delete("/api/projects/{project_id}/detail")]
pub async fn delete_project_detail_handler(
    _key: AdminKey,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let key = LookupKey::project_id(&path.into_inner());

    match data.project.delete_detail.execute(&key).await {
        Ok(()) => ApiResponse::message("Project detail deleted successfully"),

        Err(DeleteProjectDetailError::ProjectNotFound) => {
            ApiResponse::not_found("PROJECT_NOT_FOUND", "Project not found")
        }

        Err(DeleteProjectDetailError::DetailNotFound) => {
            ApiResponse::not_found("PROJECT_DETAIL_NOT_FOUND", "Project detail not found")
        }

        Err(DeleteProjectDetailError::RepositoryError(e)) => {
            error!("Repository error deleting detail of {}: {}", key, e);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use serde_json::Value;

    use crate::modules::auth::adapter::incoming::web::extractors::API_KEY_HEADER;
    use crate::modules::project::application::ports::incoming::use_cases::DeleteProjectDetailUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{test_key_verifier, TEST_API_KEY};

    struct MockDeleteDetail(Result<(), DeleteProjectDetailError>);

    #[async_trait]
    impl DeleteProjectDetailUseCase for MockDeleteDetail {
        async fn execute(&self, _key: &LookupKey) -> Result<(), DeleteProjectDetailError> {
            self.0.clone()
        }
    }

    async fn call(result: Result<(), DeleteProjectDetailError>) -> (StatusCode, Value) {
        let app = test::init_service(
            App::new()
                .app_data(
                    TestAppStateBuilder::default()
                        .with_delete_project_detail(MockDeleteDetail(result))
                        .build(),
                )
                .app_data(test_key_verifier())
                .service(delete_project_detail_handler),
        )
        .await;

        let req = test::TestRequest::delete()
            .uri("/api/projects/shop/detail")
            .insert_header((API_KEY_HEADER, TEST_API_KEY))
            .to_request();
        let resp = test::call_service(&app, req).await;
        let status = resp.status();
        (status, test::read_body_json(resp).await)
    }

    #[actix_web::test]
    async fn test_deleted() {
        let (status, body) = call(Ok(())).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
    }

    #[actix_web::test]
    async fn test_missing_detail_has_its_own_code() {
        let (status, body) = call(Err(DeleteProjectDetailError::DetailNotFound)).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "PROJECT_DETAIL_NOT_FOUND");
    }

    #[actix_web::test]
    async fn test_missing_project() {
        let (status, body) = call(Err(DeleteProjectDetailError::ProjectNotFound)).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "PROJECT_NOT_FOUND");
    }
}
