use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::shared::json_text::FieldDiagnostic;

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ProjectIndex {
    pub id: Uuid,
    pub project_id: String,
    pub project_title: String,
    pub project_subtitle: Option<String>,
    pub project_cover_img: Option<String>,
    pub project_tech_stacks: Vec<String>,
    pub project_link: Option<String>,
    pub github_link: Option<String>,
    pub project_status: Option<String>,
    pub personal: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub diagnostics: Vec<FieldDiagnostic>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
