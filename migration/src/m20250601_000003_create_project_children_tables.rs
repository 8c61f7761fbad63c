use sea_orm_migration::prelude::*;

use crate::m20250601_000002_create_projects_table::Projects;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// Builds one child table: integer pk, FK to projects, two text columns.
fn child_table<T>(table: T, pk: T, project_uuid: T, name: T, text: T, fk: &str) -> TableCreateStatement
where
    T: IntoIden + Copy + 'static,
{
    Table::create()
        .table(table)
        .if_not_exists()
        .col(
            ColumnDef::new(pk)
                .integer()
                .not_null()
                .auto_increment()
                .primary_key(),
        )
        .col(ColumnDef::new(project_uuid).uuid().not_null())
        .col(ColumnDef::new(name).text().not_null())
        .col(ColumnDef::new(text).text())
        .foreign_key(
            ForeignKey::create()
                .name(fk)
                .from(table, project_uuid)
                .to(Projects::Table, Projects::Id)
                .on_delete(ForeignKeyAction::Cascade)
                .on_update(ForeignKeyAction::Cascade),
        )
        .to_owned()
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(child_table(
                ProjectFeatures::Table,
                ProjectFeatures::FeatureId,
                ProjectFeatures::ProjectUuid,
                ProjectFeatures::FeatureName,
                ProjectFeatures::FeatureDescription,
                "fk_project_features_project_uuid",
            ))
            .await?;

        manager
            .create_table(child_table(
                ProjectGoals::Table,
                ProjectGoals::GoalId,
                ProjectGoals::ProjectUuid,
                ProjectGoals::GoalName,
                ProjectGoals::GoalDescription,
                "fk_project_goals_project_uuid",
            ))
            .await?;

        manager
            .create_table(child_table(
                ProjectTimeline::Table,
                ProjectTimeline::TimelineId,
                ProjectTimeline::ProjectUuid,
                ProjectTimeline::TimelineName,
                ProjectTimeline::TimelineDescription,
                "fk_project_timeline_project_uuid",
            ))
            .await?;

        manager
            .create_table(child_table(
                TeamMembers::Table,
                TeamMembers::MemberId,
                TeamMembers::ProjectUuid,
                TeamMembers::MemberName,
                TeamMembers::MemberRole,
                "fk_team_members_project_uuid",
            ))
            .await?;

        // Lookups always go through the parent
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_project_features_project_uuid ON project_features (project_uuid);
                CREATE INDEX IF NOT EXISTS idx_project_goals_project_uuid ON project_goals (project_uuid);
                CREATE INDEX IF NOT EXISTS idx_project_timeline_project_uuid ON project_timeline (project_uuid);
                CREATE INDEX IF NOT EXISTS idx_team_members_project_uuid ON team_members (project_uuid);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TeamMembers::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ProjectTimeline::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ProjectGoals::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ProjectFeatures::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden, Clone, Copy)]
enum ProjectFeatures {
    Table,
    FeatureId,
    ProjectUuid,
    FeatureName,
    FeatureDescription,
}

#[derive(DeriveIden, Clone, Copy)]
enum ProjectGoals {
    Table,
    GoalId,
    ProjectUuid,
    GoalName,
    GoalDescription,
}

#[derive(DeriveIden, Clone, Copy)]
enum ProjectTimeline {
    Table,
    TimelineId,
    ProjectUuid,
    TimelineName,
    TimelineDescription,
}

#[derive(DeriveIden, Clone, Copy)]
enum TeamMembers {
    Table,
    MemberId,
    ProjectUuid,
    MemberName,
    MemberRole,
}
