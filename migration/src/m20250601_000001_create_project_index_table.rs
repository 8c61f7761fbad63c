use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Shared trigger function, reused by every table with updated_at
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE OR REPLACE FUNCTION update_updated_at_column()
                RETURNS TRIGGER AS $$
                BEGIN
                    NEW.updated_at = CURRENT_TIMESTAMP;
                    RETURN NEW;
                END;
                $$ language 'plpgsql';
                "#,
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ProjectIndexes::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ProjectIndexes::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(
                        ColumnDef::new(ProjectIndexes::ProjectId)
                            .string_len(150)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ProjectIndexes::ProjectTitle)
                            .text()
                            .not_null(),
                    )
                    .col(ColumnDef::new(ProjectIndexes::ProjectSubtitle).text())
                    .col(ColumnDef::new(ProjectIndexes::ProjectCoverImg).text())
                    // JSON document stored as text
                    .col(
                        ColumnDef::new(ProjectIndexes::ProjectTechStacks)
                            .text()
                            .not_null()
                            .default("[]"),
                    )
                    .col(ColumnDef::new(ProjectIndexes::ProjectLink).text())
                    .col(ColumnDef::new(ProjectIndexes::GithubLink).text())
                    .col(ColumnDef::new(ProjectIndexes::ProjectStatus).text())
                    .col(
                        ColumnDef::new(ProjectIndexes::Personal)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(ProjectIndexes::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(ProjectIndexes::UpdatedAt)
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
                    .table(ProjectIndexes::Table)
                    .name("idx_project_indexes_project_id_unique")
                    .col(ProjectIndexes::ProjectId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TRIGGER update_project_indexes_updated_at
                BEFORE UPDATE ON project_indexes
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
                "DROP TRIGGER IF EXISTS update_project_indexes_updated_at ON project_indexes",
            )
            .await?;

        manager
            .drop_table(Table::drop().table(ProjectIndexes::Table).to_owned())
            .await?;

        // Last table to go takes the shared function with it
        manager
            .get_connection()
            .execute_unprepared("DROP FUNCTION IF EXISTS update_updated_at_column")
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum ProjectIndexes {
    Table,
    Id,
    ProjectId,
    ProjectTitle,
    ProjectSubtitle,
    ProjectCoverImg,
    ProjectTechStacks,
    ProjectLink,
    GithubLink,
    ProjectStatus,
    Personal,
    CreatedAt,
    UpdatedAt,
}
