use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue, Set};
use serde::{Deserialize, Serialize};

use crate::modules::project_index::domain::entities::ProjectIndex;
use crate::shared::json_text::{self, Diagnostics};

// The "project_indexes" table
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "project_indexes")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Uuid")]
    pub id: Uuid,

    #[sea_orm(column_type = "Text", unique)]
    pub project_id: String,

    #[sea_orm(column_type = "Text")]
    pub project_title: String,

    #[sea_orm(column_type = "Text", nullable)]
    pub project_subtitle: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub project_cover_img: Option<String>,

    // JSON array of strings, stored as text
    #[sea_orm(column_type = "Text")]
    pub project_tech_stacks: String,

    #[sea_orm(column_type = "Text", nullable)]
    pub project_link: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub github_link: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub project_status: Option<String>,

    pub personal: bool,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub created_at: DateTimeWithTimeZone,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub updated_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn to_domain(&self) -> ProjectIndex {
        let mut diagnostics = Diagnostics::default();

        ProjectIndex {
            id: self.id,
            project_id: self.project_id.clone(),
            project_title: self.project_title.clone(),
            project_subtitle: self.project_subtitle.clone(),
            project_cover_img: self.project_cover_img.clone(),
            project_tech_stacks: diagnostics.take(
                &self.project_id,
                "project_tech_stacks",
                json_text::decode(Some(&self.project_tech_stacks)),
            ),
            project_link: self.project_link.clone(),
            github_link: self.github_link.clone(),
            project_status: self.project_status.clone(),
            personal: self.personal,
            diagnostics: diagnostics.into_vec(),
            created_at: self.created_at.into(),
            updated_at: self.updated_at.into(),
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, _insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        if let ActiveValue::Set(project_id) = &self.project_id {
            self.project_id = Set(project_id.trim().to_string());
        }

        if let ActiveValue::Set(title) = &self.project_title {
            self.project_title = Set(title.trim().to_string());
        }

        Ok(self)
    }
}
