use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "project_timeline")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub timeline_id: i32,

    #[sea_orm(column_type = "Uuid")]
    pub project_uuid: Uuid,

    #[sea_orm(column_type = "Text")]
    pub timeline_name: String,

    #[sea_orm(column_type = "Text", nullable)]
    pub timeline_description: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::projects::Entity",
        from = "Column::ProjectUuid",
        to = "super::projects::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Projects,
}

impl Related<super::projects::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Projects.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
