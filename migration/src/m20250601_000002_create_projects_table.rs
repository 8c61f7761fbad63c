use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Projects::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Projects::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(Projects::ProjectId).string_len(150).not_null())
                    .col(ColumnDef::new(Projects::ProjectTitle).text().not_null())
                    .col(ColumnDef::new(Projects::ProjectSubtitle).text())
                    .col(ColumnDef::new(Projects::ProjectCoverImg).text())
                    .col(ColumnDef::new(Projects::ProjectDescription).text())
                    .col(
                        ColumnDef::new(Projects::ProjectTechStacks)
                            .text()
                            .not_null()
                            .default("[]"),
                    )
                    .col(ColumnDef::new(Projects::TechnicalSpecifications).text())
                    .col(ColumnDef::new(Projects::ProjectLink).text())
                    .col(ColumnDef::new(Projects::GithubLink).text())
                    .col(ColumnDef::new(Projects::ProjectStatus).text())
                    .col(
                        ColumnDef::new(Projects::Personal)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Projects::IsDetails)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Projects::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Projects::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .table(Projects::Table)
                    .name("idx_projects_project_id_unique")
                    .col(Projects::ProjectId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TRIGGER update_projects_updated_at
                BEFORE UPDATE ON projects
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
            .execute_unprepared("DROP TRIGGER IF EXISTS update_projects_updated_at ON projects")
            .await?;

        manager
            .drop_table(Table::drop().table(Projects::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Projects {
    Table,
    Id,
    ProjectId,
    ProjectTitle,
    ProjectSubtitle,
    ProjectCoverImg,
    ProjectDescription,
    ProjectTechStacks,
    TechnicalSpecifications,
    ProjectLink,
    GithubLink,
    ProjectStatus,
    Personal,
    IsDetails,
    CreatedAt,
    UpdatedAt,
}
