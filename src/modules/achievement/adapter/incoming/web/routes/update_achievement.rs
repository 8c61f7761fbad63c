use actix_multipart::Multipart;
use actix_web::{put, web, Responder};

use super::super::achievement_form::{from_parsed, save_error_response, IMAGE_FIELD};
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::achievement::domain::entities::Achievement;
use crate::modules::auth::adapter::incoming::web::extractors::AdminKey;
use crate::modules::multimedia::adapter::incoming::web::multipart_form::read_form;
use crate::modules::multimedia::application::domain::policies::UploadPolicy;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Same fields as create; unsent fields and the image are kept, blank
/// optional fields are cleared.
#[utoipa::path(
    put,
    path = "/api/achievements/{id}",
    tag = "achievements",
    params(("id" = i32, Path, description = "Achievement id")),
    request_body(content_type = "multipart/form-data", description = "title, type, date, description, category, image"),
    security(("ApiKeyAuth" = [])),
    responses(
        (status = 200, description = "Achievement updated", body = inline(SuccessResponse<Achievement>)),
        (status = 400, description = "Blank required field or bad date", body = ErrorResponse),
        (status = 401, description = "Missing or invalid API key", body = ErrorResponse),
        (status = 404, description = "Not found", body = ErrorResponse),
        (status = 413, description = "Image too large", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[put("/api/achievements/{id}")]
pub async fn update_achievement_handler(
    _key: AdminKey,
    path: web::Path<i32>,
    payload: Multipart,
    data: web::Data<AppState>,
) -> impl Responder {
    let parsed = match read_form(payload, IMAGE_FIELD, &UploadPolicy::achievement_image()).await {
        Ok(parsed) => parsed,
        Err(e) => return e.into_response(),
    };

    match data
        .achievement
        .update
        .execute(path.into_inner(), from_parsed(parsed))
        .await
    {
        Ok(updated) => ApiResponse::success(updated),
        Err(e) => save_error_response(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use serde_json::Value;
    use std::sync::{Arc, Mutex};

    use crate::modules::achievement::application::ports::incoming::use_cases::{
        AchievementForm, SaveAchievementError, UpdateAchievementUseCase,
    };
    use crate::modules::auth::adapter::incoming::web::extractors::API_KEY_HEADER;
    use crate::modules::multimedia::adapter::incoming::web::multipart_form::test_body::{
        build, content_type, Part,
    };
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{test_key_verifier, TEST_API_KEY};
    use crate::tests::support::fixtures::achievement;

    struct MockUpdate {
        result: Result<Achievement, SaveAchievementError>,
        received: Arc<Mutex<Option<(i32, AchievementForm)>>>,
    }

    #[async_trait]
    impl UpdateAchievementUseCase for MockUpdate {
        async fn execute(
            &self,
            id: i32,
            form: AchievementForm,
        ) -> Result<Achievement, SaveAchievementError> {
            *self.received.lock().unwrap() = Some((id, form));
            self.result.clone()
        }
    }

    async fn call(
        result: Result<Achievement, SaveAchievementError>,
        parts: &[Part<'_>],
    ) -> (StatusCode, Value, Option<(i32, AchievementForm)>) {
        let received = Arc::new(Mutex::new(None));
        let app = test::init_service(
            App::new()
                .app_data(
                    TestAppStateBuilder::default()
                        .with_update_achievement(MockUpdate {
                            result,
                            received: received.clone(),
                        })
                        .build(),
                )
                .app_data(test_key_verifier())
                .service(update_achievement_handler),
        )
        .await;

        let req = test::TestRequest::put()
            .uri("/api/achievements/3")
            .insert_header((API_KEY_HEADER, TEST_API_KEY))
            .insert_header(("content-type", content_type()))
            .set_payload(build(parts))
            .to_request();

        let resp = test::call_service(&app, req).await;
        let status = resp.status();
        let body = test::read_body_json(resp).await;
        let sent = received.lock().unwrap().clone();
        (status, body, sent)
    }

    #[actix_web::test]
    async fn test_update_text_only() {
        let (status, _, sent) = call(
            Ok(achievement(3)),
            &[Part::Text("title", "Renamed"), Part::Text("description", "")],
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let (id, form) = sent.unwrap();
        assert_eq!(id, 3);
        assert_eq!(form.title.as_deref(), Some("Renamed"));
        assert_eq!(form.description.as_deref(), Some(""));
        assert!(form.category.is_none());
        assert!(form.image.is_none());
    }

    #[actix_web::test]
    async fn test_update_missing_record() {
        let (status, body, _) = call(
            Err(SaveAchievementError::NotFound),
            &[Part::Text("title", "Renamed")],
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "ACHIEVEMENT_NOT_FOUND");
    }

    #[actix_web::test]
    async fn test_update_rejects_oversized_image() {
        let big = vec![0u8; 5 * 1024 * 1024 + 1];
        let (status, body, sent) = call(
            Ok(achievement(3)),
            &[Part::File {
                field: "image",
                file_name: "huge.png",
                content_type: "image/png",
                bytes: &big,
            }],
        )
        .await;

        assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(body["error"]["code"], "FILE_TOO_LARGE");
        assert!(sent.is_none());
    }
}
