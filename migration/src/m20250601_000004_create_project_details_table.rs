use sea_orm_migration::prelude::*;

use crate::m20250601_000002_create_projects_table::Projects;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ProjectDetails::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ProjectDetails::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(
                        ColumnDef::new(ProjectDetails::ProjectUuid)
                            .uuid()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(ProjectDetails::ProjectImages)
                            .text()
                            .not_null()
                            .default("[]"),
                    )
                    .col(ColumnDef::new(ProjectDetails::ProjectFlowchart).text())
                    .col(
                        ColumnDef::new(ProjectDetails::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(ProjectDetails::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_project_details_project_uuid")
                            .from(ProjectDetails::Table, ProjectDetails::ProjectUuid)
                            .to(Projects::Table, Projects::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TRIGGER update_project_details_updated_at
                BEFORE UPDATE ON project_details
                FOR EACH ROW
                EXECUTE FUNCTION update_updated_at_column();
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                "DROP TRIGGER IF EXISTS update_project_details_updated_at ON project_details",
            )
            .await?;

        manager
            .drop_table(Table::drop().table(ProjectDetails::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum ProjectDetails {
    Table,
    Id,
    ProjectUuid,
    ProjectImages,
    ProjectFlowchart,
    CreatedAt,
    UpdatedAt,
}
