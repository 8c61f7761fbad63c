// src/modules/project/application/ports/outgoing/project_query.rs

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;
use uuid::Uuid;

pub use crate::shared::json_text::FieldDiagnostic;
use crate::shared::lookup_key::LookupKey;

//
// ──────────────────────────────────────────────────────────
// Query DTOs
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FeatureItem {
    pub feature_id: i32,
    pub feature_name: String,
    pub feature_description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct GoalItem {
    pub goal_id: i32,
    pub goal_name: String,
    pub goal_description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TimelineItem {
    pub timeline_id: i32,
    pub timeline_name: String,
    pub timeline_description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TeamMemberItem {
    pub member_id: i32,
    pub member_name: String,
    pub member_role: Option<String>,
}

/// Fixed two-field shape of the stored flowchart document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Flowchart {
    #[serde(default)]
    pub mermaid_code: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ProjectDetailItem {
    pub project_images: Vec<String>,
    pub project_flowchart: Flowchart,
}


#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ProjectView {
    pub id: Uuid,
    pub project_id: String,
    pub project_title: String,
    pub project_subtitle: Option<String>,
    pub project_cover_img: Option<String>,
    pub project_description: Option<String>,
    pub project_tech_stacks: Vec<String>,
    #[schema(value_type = Option<Object>)]
    pub technical_specifications: Option<Value>,
    pub project_link: Option<String>,
    pub github_link: Option<String>,
    pub project_status: Option<String>,
    pub personal: bool,
    pub is_details: bool,
    pub project_features: Vec<FeatureItem>,
    pub project_goals: Vec<GoalItem>,
    pub project_timeline: Vec<TimelineItem>,
    pub team_members: Vec<TeamMemberItem>,
    pub project_detail: Option<ProjectDetailItem>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub diagnostics: Vec<FieldDiagnostic>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Detail view keyed by business key; defaults when no detail exists.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, ToSchema)]
pub struct ProjectDetailView {
    pub project_id: String,
    pub project_images: Vec<String>,
    pub project_flowchart: Flowchart,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub diagnostics: Vec<FieldDiagnostic>,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum ProjectQueryError {
    #[error("Project not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port (Read-side, joins the four child tables and the detail)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait ProjectQuery: Send + Sync {
    /// All projects, oldest first, children ordered by their id.
    async fn list(&self) -> Result<Vec<ProjectView>, ProjectQueryError>;

    async fn get(&self, key: &LookupKey) -> Result<ProjectView, ProjectQueryError>;

    async fn get_detail(&self, key: &LookupKey) -> Result<ProjectDetailView, ProjectQueryError>;
}
