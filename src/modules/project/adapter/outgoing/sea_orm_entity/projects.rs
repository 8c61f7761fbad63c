use sea_orm::entity::prelude::*;
use sea_orm::{ActiveModelBehavior, ActiveValue, Set};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "projects")]
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

    #[sea_orm(column_type = "Text", nullable)]
    pub project_description: Option<String>,

    // JSON array of strings, stored as text
    #[sea_orm(column_type = "Text")]
    pub project_tech_stacks: String,

    // Arbitrary JSON document, stored as text
    #[sea_orm(column_type = "Text", nullable)]
    pub technical_specifications: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub project_link: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub github_link: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub project_status: Option<String>,

    pub personal: bool,

    pub is_details: bool,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub created_at: DateTimeWithTimeZone,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::project_features::Entity")]
    ProjectFeatures,

    #[sea_orm(has_many = "super::project_goals::Entity")]
    ProjectGoals,

    #[sea_orm(has_many = "super::project_timeline::Entity")]
    ProjectTimeline,

    #[sea_orm(has_many = "super::team_members::Entity")]
    TeamMembers,

    #[sea_orm(has_one = "super::project_details::Entity")]
    ProjectDetails,
}

impl Related<super::project_features::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProjectFeatures.def()
    }
}

impl Related<super::project_goals::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProjectGoals.def()
    }
}

impl Related<super::project_timeline::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProjectTimeline.def()
    }
}

impl Related<super::team_members::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TeamMembers.def()
    }
}

impl Related<super::project_details::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProjectDetails.def()
    }
}

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

        #[cfg(feature = "no_db_triggers")]
        {
            use chrono::Utc;

            if !_insert {
                self.updated_at = Set(Utc::now().into());
            }
        }

        Ok(self)
    }
}
