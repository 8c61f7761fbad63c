// src/api/schemas.rs
//! OpenAPI mirrors of the `ApiResponse` envelope. The handlers build their
//! bodies through `ApiResponse`; these types only describe them.
use serde::Serialize;
use utoipa::ToSchema;

/// `{ "success": true, "data": ... }`
#[derive(Serialize, ToSchema)]
#[serde(bound = "T: Serialize")]
pub struct SuccessResponse<T> {
    #[schema(example = true)]
    pub success: bool,
    pub data: T,
}

/// Body of a successful delete.
#[derive(Serialize, ToSchema)]
pub struct MessageResponse {
    #[schema(example = true)]
    pub success: bool,
    pub data: MessageData,
}

#[derive(Serialize, ToSchema)]
pub struct MessageData {
    #[schema(example = "Project deleted")]
    pub message: String,
}

/// `{ "success": false, "error": { "code", "message" } }`
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = false)]
    pub success: bool,
    pub error: ErrorDetail,
}

#[derive(Serialize, ToSchema)]
pub struct ErrorDetail {
    /// Stable machine-readable code, e.g. `PROJECT_NOT_FOUND` or `VALIDATION_ERROR`
    #[schema(example = "PROJECT_NOT_FOUND")]
    pub code: String,

    #[schema(example = "Project not found")]
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api::ApiResponse;
    use actix_web::body::to_bytes;
    use serde_json::Value;

    async fn body(resp: actix_web::HttpResponse) -> Value {
        let bytes = to_bytes(resp.into_body()).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[actix_web::test]
    async fn test_error_schema_matches_envelope() {
        let documented = serde_json::to_value(ErrorResponse {
            success: false,
            error: ErrorDetail {
                code: "PROJECT_NOT_FOUND".to_string(),
                message: "Project not found".to_string(),
            },
        })
        .unwrap();

        let served = body(ApiResponse::not_found("PROJECT_NOT_FOUND", "Project not found")).await;
        assert_eq!(documented, served);
    }

    #[actix_web::test]
    async fn test_message_schema_matches_envelope() {
        let documented = serde_json::to_value(MessageResponse {
            success: true,
            data: MessageData {
                message: "Project deleted".to_string(),
            },
        })
        .unwrap();

        let served = body(ApiResponse::message("Project deleted")).await;
        assert_eq!(documented, served);
    }
}
