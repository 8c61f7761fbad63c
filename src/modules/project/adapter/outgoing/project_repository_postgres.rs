// src/modules/project/adapter/outgoing/project_repository_postgres.rs

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DatabaseTransaction, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, Set, SqlErr, TransactionTrait,
};
use std::sync::Arc;
use tracing::{error, info};
use uuid::Uuid;

use crate::modules::project::adapter::outgoing::project_rows::{
    delete_children, detail_view, find_detail, find_project, insert_children, load_views,
    replace_children,
};
use crate::modules::project::adapter::outgoing::sea_orm_entity::{
    project_details, project_features, project_goals, project_timeline, projects, team_members,
};
use crate::modules::project::application::ports::outgoing::project_query::ProjectView;
use crate::modules::project::application::ports::outgoing::project_repository::{
    CreateProjectData, ProjectRepository, ProjectRepositoryError, UpdateProjectData,
    UpsertProjectDetailData, UpsertedProjectDetail,
};
use crate::shared::json_text;
use crate::shared::lookup_key::LookupKey;
use crate::shared::patch::PatchField;

// ============================================================================
// Repository Implementation
// ============================================================================

#[derive(Clone)]
pub struct ProjectRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProjectRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn begin(&self) -> Result<DatabaseTransaction, ProjectRepositoryError> {
        self.db.begin().await.map_err(map_txn_err)
    }
}

#[async_trait]
impl ProjectRepository for ProjectRepositoryPostgres {
    async fn create_project(
        &self,
        data: CreateProjectData,
    ) -> Result<ProjectView, ProjectRepositoryError> {
        let txn = self.begin().await?;
        let result = create_in(&txn, data).await;
        let view = finish(txn, result).await?;

        info!(project_id = %view.project_id, "Project created");
        Ok(view)
    }

    async fn update_project(
        &self,
        key: &LookupKey,
        data: UpdateProjectData,
    ) -> Result<ProjectView, ProjectRepositoryError> {
        let txn = self.begin().await?;
        let result = update_in(&txn, key, data).await;
        finish(txn, result).await
    }

    async fn delete_project(&self, key: &LookupKey) -> Result<(), ProjectRepositoryError> {
        let txn = self.begin().await?;
        let result = delete_in(&txn, key).await;
        finish(txn, result).await?;

        info!(key = %key, "Project deleted");
        Ok(())
    }

    async fn upsert_detail(
        &self,
        key: &LookupKey,
        data: UpsertProjectDetailData,
    ) -> Result<UpsertedProjectDetail, ProjectRepositoryError> {
        let txn = self.begin().await?;
        let result = upsert_detail_in(&txn, key, data).await;
        finish(txn, result).await
    }

    async fn delete_detail(&self, key: &LookupKey) -> Result<(), ProjectRepositoryError> {
        let txn = self.begin().await?;
        let result = delete_detail_in(&txn, key).await;
        finish(txn, result).await
    }
}

// ============================================================================
// Transaction bodies
// ============================================================================

/// Commits on success, rolls back on failure.
async fn finish<T>(
    txn: DatabaseTransaction,
    result: Result<T, ProjectRepositoryError>,
) -> Result<T, ProjectRepositoryError> {
    match result {
        Ok(value) => {
            txn.commit().await.map_err(map_txn_err)?;
            Ok(value)
        }
        Err(e) => {
            if let Err(rollback_err) = txn.rollback().await {
                error!(error = %rollback_err, "Project transaction rollback failed");
            }
            Err(e)
        }
    }
}

async fn create_in(
    txn: &DatabaseTransaction,
    data: CreateProjectData,
) -> Result<ProjectView, ProjectRepositoryError> {
    let now = Utc::now().fixed_offset();

    let model = projects::ActiveModel {
        id: Set(Uuid::new_v4()),
        project_id: Set(data.project_id),
        project_title: Set(data.project_title),
        project_subtitle: Set(data.project_subtitle),
        project_cover_img: Set(data.project_cover_img),
        project_description: Set(data.project_description),
        project_tech_stacks: Set(to_text(&data.project_tech_stacks)?),
        technical_specifications: Set(data
            .technical_specifications
            .as_ref()
            .map(to_text)
            .transpose()?),
        project_link: Set(data.project_link),
        github_link: Set(data.github_link),
        project_status: Set(data.project_status),
        personal: Set(data.personal),
        is_details: Set(false),
        created_at: Set(now),
        updated_at: Set(now),
    };

    let parent = model.insert(txn).await.map_err(map_project_id_error)?;

    insert_children::<project_features::Entity, _>(txn, parent.id, data.features)
        .await
        .map_err(map_db_err)?;
    insert_children::<project_goals::Entity, _>(txn, parent.id, data.goals)
        .await
        .map_err(map_db_err)?;
    insert_children::<project_timeline::Entity, _>(txn, parent.id, data.timeline)
        .await
        .map_err(map_db_err)?;
    insert_children::<team_members::Entity, _>(txn, parent.id, data.team_members)
        .await
        .map_err(map_db_err)?;

    reload(txn, parent).await
}

async fn update_in(
    txn: &DatabaseTransaction,
    key: &LookupKey,
    data: UpdateProjectData,
) -> Result<ProjectView, ProjectRepositoryError> {
    let parent = require_project(txn, key).await?;
    let project_uuid = parent.id;
    let touches_children = data.touches_children();

    let mut model = parent.clone().into_active_model();

    if let Some(title) = data.project_title {
        model.project_title = Set(title);
    }
    apply_nullable(&mut model.project_subtitle, data.project_subtitle);
    apply_nullable(&mut model.project_cover_img, data.project_cover_img);
    apply_nullable(&mut model.project_description, data.project_description);
    apply_nullable(&mut model.project_link, data.project_link);
    apply_nullable(&mut model.github_link, data.github_link);
    apply_nullable(&mut model.project_status, data.project_status);

    if let Some(stacks) = data.project_tech_stacks {
        model.project_tech_stacks = Set(to_text(&stacks)?);
    }
    match data.technical_specifications {
        PatchField::Unset => {}
        PatchField::Null => model.technical_specifications = Set(None),
        PatchField::Value(specs) => model.technical_specifications = Set(Some(to_text(&specs)?)),
    }
    if let Some(personal) = data.personal {
        model.personal = Set(personal);
    }

    let parent = if model.is_changed() || touches_children {
        model.updated_at = Set(Utc::now().fixed_offset());
        model.update(txn).await.map_err(map_db_err)?
    } else {
        parent
    };

    if let Some(rows) = data.features {
        replace_children::<project_features::Entity, _>(txn, project_uuid, rows)
            .await
            .map_err(map_db_err)?;
    }
    if let Some(rows) = data.goals {
        replace_children::<project_goals::Entity, _>(txn, project_uuid, rows)
            .await
            .map_err(map_db_err)?;
    }
    if let Some(rows) = data.timeline {
        replace_children::<project_timeline::Entity, _>(txn, project_uuid, rows)
            .await
            .map_err(map_db_err)?;
    }
    if let Some(rows) = data.team_members {
        replace_children::<team_members::Entity, _>(txn, project_uuid, rows)
            .await
            .map_err(map_db_err)?;
    }

    reload(txn, parent).await
}

async fn delete_in(txn: &DatabaseTransaction, key: &LookupKey) -> Result<(), ProjectRepositoryError> {
    let parent = require_project(txn, key).await?;

    delete_children::<project_features::Entity, _>(txn, parent.id)
        .await
        .map_err(map_db_err)?;
    delete_children::<project_goals::Entity, _>(txn, parent.id)
        .await
        .map_err(map_db_err)?;
    delete_children::<project_timeline::Entity, _>(txn, parent.id)
        .await
        .map_err(map_db_err)?;
    delete_children::<team_members::Entity, _>(txn, parent.id)
        .await
        .map_err(map_db_err)?;

    project_details::Entity::delete_many()
        .filter(project_details::Column::ProjectUuid.eq(parent.id))
        .exec(txn)
        .await
        .map_err(map_db_err)?;

    let res = projects::Entity::delete_by_id(parent.id)
        .exec(txn)
        .await
        .map_err(map_db_err)?;

    if res.rows_affected == 0 {
        return Err(ProjectRepositoryError::NotFound);
    }

    Ok(())
}

async fn upsert_detail_in(
    txn: &DatabaseTransaction,
    key: &LookupKey,
    data: UpsertProjectDetailData,
) -> Result<UpsertedProjectDetail, ProjectRepositoryError> {
    let parent = require_project(txn, key).await?;
    let existing = find_detail(txn, parent.id).await.map_err(map_db_err)?;
    let flowchart = to_text(&data.project_flowchart)?;
    let now = Utc::now().fixed_offset();

    let (stored, created) = match existing {
        Some(current) => {
            let mut model = current.into_active_model();
            // no images supplied: the stored text stays as it is, malformed or not
            if let Some(images) = data.project_images {
                model.project_images = Set(to_text(&images)?);
            }
            model.project_flowchart = Set(Some(flowchart));
            model.updated_at = Set(now);

            (model.update(txn).await.map_err(map_db_err)?, false)
        }
        None => {
            let images = data.project_images.unwrap_or_default();
            let model = project_details::ActiveModel {
                id: Set(Uuid::new_v4()),
                project_uuid: Set(parent.id),
                project_images: Set(to_text(&images)?),
                project_flowchart: Set(Some(flowchart)),
                created_at: Set(now),
                updated_at: Set(now),
            };

            (model.insert(txn).await.map_err(map_db_err)?, true)
        }
    };

    if !parent.is_details {
        set_is_details(txn, parent.id, true).await?;
    }

    Ok(UpsertedProjectDetail {
        created,
        detail: detail_view(&parent, Some(&stored)),
    })
}

async fn delete_detail_in(
    txn: &DatabaseTransaction,
    key: &LookupKey,
) -> Result<(), ProjectRepositoryError> {
    let parent = require_project(txn, key).await?;

    let res = project_details::Entity::delete_many()
        .filter(project_details::Column::ProjectUuid.eq(parent.id))
        .exec(txn)
        .await
        .map_err(map_db_err)?;

    if res.rows_affected == 0 {
        return Err(ProjectRepositoryError::DetailNotFound);
    }

    set_is_details(txn, parent.id, false).await
}

// ============================================================================
// Helper Functions
// ============================================================================

async fn require_project(
    txn: &DatabaseTransaction,
    key: &LookupKey,
) -> Result<projects::Model, ProjectRepositoryError> {
    find_project(txn, key)
        .await
        .map_err(map_db_err)?
        .ok_or(ProjectRepositoryError::NotFound)
}

async fn set_is_details(
    txn: &DatabaseTransaction,
    project_uuid: Uuid,
    value: bool,
) -> Result<(), ProjectRepositoryError> {
    projects::Entity::update_many()
        .col_expr(projects::Column::IsDetails, Expr::value(value))
        .filter(projects::Column::Id.eq(project_uuid))
        .exec(txn)
        .await
        .map_err(map_db_err)?;
    Ok(())
}

async fn reload(
    txn: &DatabaseTransaction,
    parent: projects::Model,
) -> Result<ProjectView, ProjectRepositoryError> {
    load_views(txn, vec![parent])
        .await
        .map_err(map_db_err)?
        .into_iter()
        .next()
        .ok_or(ProjectRepositoryError::NotFound)
}

fn apply_nullable(target: &mut sea_orm::ActiveValue<Option<String>>, patch: PatchField<String>) {
    if let Some(value) = patch.into_update() {
        *target = Set(value);
    }
}

fn to_text<T: serde::Serialize>(value: &T) -> Result<String, ProjectRepositoryError> {
    json_text::encode(value).map_err(|e| ProjectRepositoryError::SerializationError(e.to_string()))
}

fn map_project_id_error(e: DbErr) -> ProjectRepositoryError {
    if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) {
        return ProjectRepositoryError::ProjectIdAlreadyExists;
    }

    let msg = e.to_string().to_lowercase();

    if (msg.contains("duplicate") || msg.contains("unique") || msg.contains("23505"))
        && msg.contains("project_id")
    {
        ProjectRepositoryError::ProjectIdAlreadyExists
    } else {
        map_db_err(e)
    }
}

fn map_db_err(e: DbErr) -> ProjectRepositoryError {
    error!(error = %e, "Project repository database error");
    ProjectRepositoryError::DatabaseError(e.to_string())
}

fn map_txn_err(e: DbErr) -> ProjectRepositoryError {
    error!(error = %e, "Project transaction failed");
    ProjectRepositoryError::TransactionFailed(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::project::adapter::outgoing::project_rows::fixtures::*;
    use crate::modules::project::application::ports::outgoing::project_query::Flowchart;
    use crate::modules::project::application::ports::outgoing::project_repository::{
        FeatureInput, TeamMemberInput,
    };
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};
    use serde_json::json;

    fn exec(rows: u64) -> MockExecResult {
        MockExecResult {
            last_insert_id: 0,
            rows_affected: rows,
        }
    }

    /// Appends the five follow-up reads issued by `load_views`.
    fn with_reload(
        db: MockDatabase,
        features: Vec<project_features::Model>,
        members: Vec<team_members::Model>,
    ) -> MockDatabase {
        db.append_query_results([features])
            .append_query_results([Vec::<project_goals::Model>::new()])
            .append_query_results([Vec::<project_timeline::Model>::new()])
            .append_query_results([members])
            .append_query_results([Vec::<project_details::Model>::new()])
    }

    /// Every statement the mock saw, in order. The repository must be dropped
    /// first so the connection can be reclaimed.
    fn statements(db: Arc<DatabaseConnection>) -> Vec<String> {
        let db = Arc::try_unwrap(db)
            .ok()
            .expect("connection still shared");
        db.into_transaction_log()
            .iter()
            .flat_map(|txn| txn.statements().iter().map(|stmt| stmt.sql.clone()))
            .collect()
    }

    fn assert_rolled_back(sql: &[String]) {
        assert_eq!(sql.first().map(String::as_str), Some("BEGIN"));
        assert_eq!(sql.last().map(String::as_str), Some("ROLLBACK"));
        assert!(!sql.iter().any(|s| s == "COMMIT"));
    }

    fn create_data() -> CreateProjectData {
        CreateProjectData {
            project_id: "shop".to_string(),
            project_title: "Shop".to_string(),
            project_tech_stacks: vec!["Go".to_string(), "SQL".to_string()],
            technical_specifications: Some(json!({"db": "postgres"})),
            features: vec![FeatureInput {
                feature_name: "Cart".to_string(),
                feature_description: None,
            }],
            team_members: vec![TeamMemberInput {
                member_name: "Ana".to_string(),
                member_role: Some("Engineer".to_string()),
            }],
            ..Default::default()
        }
    }

    // ========================================================================
    // create_project
    // ========================================================================

    #[tokio::test]
    async fn test_create_project_with_children() {
        let id = Uuid::new_v4();
        let db = with_reload(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([vec![project_model(id, "shop", "Shop")]])
                .append_exec_results([exec(1), exec(1)]),
            vec![feature_model(1, id, "Cart")],
            vec![member_model(1, id, "Ana")],
        )
        .into_connection();

        let repo = ProjectRepositoryPostgres::new(Arc::new(db));
        let view = repo.create_project(create_data()).await.unwrap();

        assert_eq!(view.project_id, "shop");
        assert_eq!(view.project_features[0].feature_name, "Cart");
        assert_eq!(view.team_members[0].member_name, "Ana");
    }

    #[tokio::test]
    async fn test_create_project_duplicate_project_id() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Custom(
                "duplicate key value violates unique constraint \"idx_projects_project_id_unique\""
                    .to_string(),
            )])
            .into_connection();

        let repo = ProjectRepositoryPostgres::new(Arc::new(db));
        let result = repo.create_project(create_data()).await;

        assert!(matches!(
            result,
            Err(ProjectRepositoryError::ProjectIdAlreadyExists)
        ));
    }

    #[tokio::test]
    async fn test_create_project_child_failure_rolls_back() {
        let id = Uuid::new_v4();
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([vec![project_model(id, "shop", "Shop")]])
                .append_exec_errors([DbErr::Custom("insert failed".to_string())])
                .into_connection(),
        );

        let repo = ProjectRepositoryPostgres::new(Arc::clone(&db));
        let result = repo.create_project(create_data()).await;
        drop(repo);

        assert!(matches!(result, Err(ProjectRepositoryError::DatabaseError(_))));

        let sql = statements(db);
        assert_rolled_back(&sql);
        assert!(sql[1].starts_with(r#"INSERT INTO "projects""#));
        assert!(sql[2].starts_with(r#"INSERT INTO "project_features""#));
    }

    // ========================================================================
    // update_project
    // ========================================================================

    #[tokio::test]
    async fn test_update_scalars_only() {
        let id = Uuid::new_v4();
        let mut updated = project_model(id, "shop", "Renamed");
        updated.project_subtitle = None;

        let db = with_reload(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([vec![project_model(id, "shop", "Shop")]])
                .append_query_results([vec![updated]]),
            vec![],
            vec![],
        )
        .into_connection();

        let repo = ProjectRepositoryPostgres::new(Arc::new(db));
        let view = repo
            .update_project(
                &LookupKey::ProjectId("shop".to_string()),
                UpdateProjectData {
                    project_title: Some("Renamed".to_string()),
                    project_subtitle: PatchField::Null,
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(view.project_title, "Renamed");
        assert!(view.project_subtitle.is_none());
    }

    #[tokio::test]
    async fn test_update_with_empty_list_clears_collection() {
        let id = Uuid::new_v4();
        let db = with_reload(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([vec![project_model(id, "shop", "Shop")]])
                .append_query_results([vec![project_model(id, "shop", "Shop")]])
                // delete existing features, nothing to insert
                .append_exec_results([exec(3)]),
            vec![],
            vec![member_model(1, id, "Ana")],
        )
        .into_connection();

        let repo = ProjectRepositoryPostgres::new(Arc::new(db));
        let view = repo
            .update_project(
                &LookupKey::Id(id),
                UpdateProjectData {
                    features: Some(vec![]),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert!(view.project_features.is_empty());
        assert_eq!(view.team_members.len(), 1);
    }

    #[tokio::test]
    async fn test_update_child_failure_rolls_back() {
        let id = Uuid::new_v4();
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([vec![project_model(id, "shop", "Shop")]])
                .append_query_results([vec![project_model(id, "shop", "Shop")]])
                // old features deleted, replacement insert fails
                .append_exec_results([exec(2)])
                .append_exec_errors([DbErr::Custom("insert failed".to_string())])
                .into_connection(),
        );

        let repo = ProjectRepositoryPostgres::new(Arc::clone(&db));
        let result = repo
            .update_project(
                &LookupKey::ProjectId("shop".to_string()),
                UpdateProjectData {
                    features: Some(vec![FeatureInput {
                        feature_name: "Checkout".to_string(),
                        feature_description: None,
                    }]),
                    ..Default::default()
                },
            )
            .await;
        drop(repo);

        assert!(matches!(result, Err(ProjectRepositoryError::DatabaseError(_))));

        let sql = statements(db);
        assert_rolled_back(&sql);
        assert!(sql
            .iter()
            .any(|s| s.starts_with(r#"DELETE FROM "project_features""#)));
    }

    #[tokio::test]
    async fn test_update_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<projects::Model>::new()])
            .into_connection();

        let repo = ProjectRepositoryPostgres::new(Arc::new(db));
        let result = repo
            .update_project(
                &LookupKey::ProjectId("ghost".to_string()),
                UpdateProjectData::default(),
            )
            .await;

        assert!(matches!(result, Err(ProjectRepositoryError::NotFound)));
    }

    // ========================================================================
    // delete_project
    // ========================================================================

    #[tokio::test]
    async fn test_delete_project_removes_everything() {
        let id = Uuid::new_v4();
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([vec![project_model(id, "shop", "Shop")]])
                .append_exec_results([exec(2), exec(0), exec(1), exec(1), exec(1), exec(1)])
                .into_connection(),
        );

        let repo = ProjectRepositoryPostgres::new(Arc::clone(&db));
        assert!(repo
            .delete_project(&LookupKey::ProjectId("shop".to_string()))
            .await
            .is_ok());
        drop(repo);

        let sql = statements(db);
        let deleted: Vec<&str> = sql
            .iter()
            .filter_map(|s| s.strip_prefix("DELETE FROM "))
            .filter_map(|rest| rest.split_whitespace().next())
            .collect();
        assert_eq!(
            deleted,
            vec![
                r#""project_features""#,
                r#""project_goals""#,
                r#""project_timeline""#,
                r#""team_members""#,
                r#""project_details""#,
                r#""projects""#,
            ]
        );
        assert_eq!(sql.last().map(String::as_str), Some("COMMIT"));
    }

    #[tokio::test]
    async fn test_delete_project_not_found() {
        // internal id miss, then project_id miss
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<projects::Model>::new(), Vec::<projects::Model>::new()])
            .into_connection();

        let repo = ProjectRepositoryPostgres::new(Arc::new(db));
        let result = repo.delete_project(&LookupKey::Id(Uuid::new_v4())).await;

        assert!(matches!(result, Err(ProjectRepositoryError::NotFound)));
    }

    // ========================================================================
    // upsert_detail / delete_detail
    // ========================================================================

    #[tokio::test]
    async fn test_upsert_detail_creates_and_flags_parent() {
        let id = Uuid::new_v4();
        let stored = detail_model(
            id,
            r#"["https://cdn/a.png"]"#,
            Some(r#"{"mermaid_code":"graph TD","description":"flow"}"#),
        );

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![project_model(id, "shop", "Shop")]])
            .append_query_results([Vec::<project_details::Model>::new()])
            .append_query_results([vec![stored]])
            .append_exec_results([exec(1)])
            .into_connection();

        let repo = ProjectRepositoryPostgres::new(Arc::new(db));
        let result = repo
            .upsert_detail(
                &LookupKey::ProjectId("shop".to_string()),
                UpsertProjectDetailData {
                    project_images: Some(vec!["https://cdn/a.png".to_string()]),
                    project_flowchart: Flowchart {
                        mermaid_code: "graph TD".to_string(),
                        description: "flow".to_string(),
                    },
                },
            )
            .await
            .unwrap();

        assert!(result.created);
        assert_eq!(result.detail.project_id, "shop");
        assert_eq!(result.detail.project_images, vec!["https://cdn/a.png"]);
    }

    #[tokio::test]
    async fn test_upsert_detail_updates_existing() {
        let id = Uuid::new_v4();
        let mut parent = project_model(id, "shop", "Shop");
        parent.is_details = true;
        let current = detail_model(id, r#"["https://cdn/old.png"]"#, None);
        let mut stored = current.clone();
        stored.project_flowchart =
            Some(r#"{"mermaid_code":"graph LR","description":""}"#.to_string());

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![parent]])
            .append_query_results([vec![current]])
            .append_query_results([vec![stored]])
            .into_connection();

        let repo = ProjectRepositoryPostgres::new(Arc::new(db));
        let result = repo
            .upsert_detail(
                &LookupKey::Id(id),
                UpsertProjectDetailData {
                    project_images: None,
                    project_flowchart: Flowchart {
                        mermaid_code: "graph LR".to_string(),
                        description: String::new(),
                    },
                },
            )
            .await
            .unwrap();

        assert!(!result.created);
        assert_eq!(result.detail.project_images, vec!["https://cdn/old.png"]);
        assert_eq!(result.detail.project_flowchart.mermaid_code, "graph LR");
    }

    #[tokio::test]
    async fn test_upsert_detail_keeps_unreadable_images() {
        let id = Uuid::new_v4();
        let mut parent = project_model(id, "shop", "Shop");
        parent.is_details = true;
        let current = detail_model(id, r#"["https://cdn/a.png", "#, None);
        let mut stored = current.clone();
        stored.project_flowchart =
            Some(r#"{"mermaid_code":"graph LR","description":""}"#.to_string());

        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([vec![parent]])
                .append_query_results([vec![current]])
                .append_query_results([vec![stored]])
                .into_connection(),
        );

        let repo = ProjectRepositoryPostgres::new(Arc::clone(&db));
        let result = repo
            .upsert_detail(
                &LookupKey::ProjectId("shop".to_string()),
                UpsertProjectDetailData {
                    project_images: None,
                    project_flowchart: Flowchart {
                        mermaid_code: "graph LR".to_string(),
                        description: String::new(),
                    },
                },
            )
            .await
            .unwrap();
        drop(repo);

        assert!(result.detail.project_images.is_empty());
        assert_eq!(result.detail.diagnostics.len(), 1);
        assert_eq!(result.detail.diagnostics[0].field, "project_images");
        assert_eq!(result.detail.diagnostics[0].raw, r#"["https://cdn/a.png","#);

        let sql = statements(db);
        let update = sql
            .iter()
            .find(|s| s.starts_with(r#"UPDATE "project_details""#))
            .expect("detail update issued");
        let set_clause = update.split(" WHERE ").next().unwrap_or_default();
        assert!(!set_clause.contains("project_images"));
        assert_eq!(sql.last().map(String::as_str), Some("COMMIT"));
    }

    #[tokio::test]
    async fn test_upsert_detail_flag_failure_rolls_back() {
        let id = Uuid::new_v4();
        let stored = detail_model(id, "[]", None);

        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([vec![project_model(id, "shop", "Shop")]])
                .append_query_results([Vec::<project_details::Model>::new()])
                .append_query_results([vec![stored]])
                .append_exec_errors([DbErr::Custom("update failed".to_string())])
                .into_connection(),
        );

        let repo = ProjectRepositoryPostgres::new(Arc::clone(&db));
        let result = repo
            .upsert_detail(
                &LookupKey::ProjectId("shop".to_string()),
                UpsertProjectDetailData::default(),
            )
            .await;
        drop(repo);

        assert!(matches!(result, Err(ProjectRepositoryError::DatabaseError(_))));

        let sql = statements(db);
        assert_rolled_back(&sql);
        assert!(sql
            .iter()
            .any(|s| s.starts_with(r#"INSERT INTO "project_details""#)));
    }

    #[tokio::test]
    async fn test_delete_detail_missing() {
        let id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![project_model(id, "shop", "Shop")]])
            .append_exec_results([exec(0)])
            .into_connection();

        let repo = ProjectRepositoryPostgres::new(Arc::new(db));
        let result = repo
            .delete_detail(&LookupKey::ProjectId("shop".to_string()))
            .await;

        assert!(matches!(result, Err(ProjectRepositoryError::DetailNotFound)));
    }

    #[tokio::test]
    async fn test_delete_detail_clears_flag() {
        let id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![project_model(id, "shop", "Shop")]])
            .append_exec_results([exec(1), exec(1)])
            .into_connection();

        let repo = ProjectRepositoryPostgres::new(Arc::new(db));
        assert!(repo
            .delete_detail(&LookupKey::ProjectId("shop".to_string()))
            .await
            .is_ok());
    }
}
