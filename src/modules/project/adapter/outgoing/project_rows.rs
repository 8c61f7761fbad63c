//! Row-level helpers shared by the project query and repository adapters.
//!
//! Everything here is generic over `ConnectionTrait` so the same code runs on
//! the pool and inside a transaction.

use std::collections::HashMap;

use sea_orm::{
    ActiveValue::NotSet, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, IntoActiveModel,
    QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

use crate::modules::project::adapter::outgoing::sea_orm_entity::{
    project_details, project_features, project_goals, project_timeline, projects, team_members,
};
use crate::modules::project::application::ports::outgoing::project_query::{
    FeatureItem, Flowchart, GoalItem, ProjectDetailItem, ProjectDetailView,
    ProjectView, TeamMemberItem, TimelineItem,
};
use crate::modules::project::application::ports::outgoing::project_repository::{
    FeatureInput, GoalInput, TeamMemberInput, TimelineInput,
};
use crate::shared::json_text::{self, Diagnostics};
use crate::shared::lookup_key::LookupKey;

// ============================================================================
// Child relations
// ============================================================================

/// A one-to-many table owned by `projects` through `project_uuid`.
pub trait ChildRelation: EntityTrait {
    type Row: Send;

    fn parent_column() -> Self::Column;

    fn to_active_model(project_uuid: Uuid, row: Self::Row) -> Self::ActiveModel;
}

impl ChildRelation for project_features::Entity {
    type Row = FeatureInput;

    fn parent_column() -> Self::Column {
        project_features::Column::ProjectUuid
    }

    fn to_active_model(project_uuid: Uuid, row: FeatureInput) -> project_features::ActiveModel {
        project_features::ActiveModel {
            feature_id: NotSet,
            project_uuid: Set(project_uuid),
            feature_name: Set(row.feature_name.trim().to_string()),
            feature_description: Set(row.feature_description),
        }
    }
}

impl ChildRelation for project_goals::Entity {
    type Row = GoalInput;

    fn parent_column() -> Self::Column {
        project_goals::Column::ProjectUuid
    }

    fn to_active_model(project_uuid: Uuid, row: GoalInput) -> project_goals::ActiveModel {
        project_goals::ActiveModel {
            goal_id: NotSet,
            project_uuid: Set(project_uuid),
            goal_name: Set(row.goal_name.trim().to_string()),
            goal_description: Set(row.goal_description),
        }
    }
}

impl ChildRelation for project_timeline::Entity {
    type Row = TimelineInput;

    fn parent_column() -> Self::Column {
        project_timeline::Column::ProjectUuid
    }

    fn to_active_model(project_uuid: Uuid, row: TimelineInput) -> project_timeline::ActiveModel {
        project_timeline::ActiveModel {
            timeline_id: NotSet,
            project_uuid: Set(project_uuid),
            timeline_name: Set(row.timeline_name.trim().to_string()),
            timeline_description: Set(row.timeline_description),
        }
    }
}

impl ChildRelation for team_members::Entity {
    type Row = TeamMemberInput;

    fn parent_column() -> Self::Column {
        team_members::Column::ProjectUuid
    }

    fn to_active_model(project_uuid: Uuid, row: TeamMemberInput) -> team_members::ActiveModel {
        team_members::ActiveModel {
            member_id: NotSet,
            project_uuid: Set(project_uuid),
            member_name: Set(row.member_name.trim().to_string()),
            member_role: Set(row.member_role),
        }
    }
}

/// Inserts rows for one parent; no statement when `rows` is empty.
pub async fn insert_children<E, C>(conn: &C, project_uuid: Uuid, rows: Vec<E::Row>) -> Result<(), DbErr>
where
    E: ChildRelation,
    E::Model: IntoActiveModel<E::ActiveModel>,
    C: ConnectionTrait,
{
    if rows.is_empty() {
        return Ok(());
    }

    let models: Vec<E::ActiveModel> = rows
        .into_iter()
        .map(|row| E::to_active_model(project_uuid, row))
        .collect();

    E::insert_many(models).exec_without_returning(conn).await?;
    Ok(())
}

/// Replaces a child collection wholesale: delete every row of the parent,
/// then insert the provided set. Callers run it inside their transaction.
pub async fn replace_children<E, C>(conn: &C, project_uuid: Uuid, rows: Vec<E::Row>) -> Result<(), DbErr>
where
    E: ChildRelation,
    E::Model: IntoActiveModel<E::ActiveModel>,
    C: ConnectionTrait,
{
    E::delete_many()
        .filter(E::parent_column().eq(project_uuid))
        .exec(conn)
        .await?;

    insert_children::<E, C>(conn, project_uuid, rows).await
}

/// Deletes every child row of one parent.
pub async fn delete_children<E, C>(conn: &C, project_uuid: Uuid) -> Result<u64, DbErr>
where
    E: ChildRelation,
    C: ConnectionTrait,
{
    let res = E::delete_many()
        .filter(E::parent_column().eq(project_uuid))
        .exec(conn)
        .await?;
    Ok(res.rows_affected)
}

// ============================================================================
// Lookups
// ============================================================================

/// Resolves a key to a project. A UUID-shaped key that matches no internal id
/// is retried as a `project_id`, since business keys may look like UUIDs too.
pub async fn find_project<C>(conn: &C, key: &LookupKey) -> Result<Option<projects::Model>, DbErr>
where
    C: ConnectionTrait,
{
    match key {
        LookupKey::Id(id) => match projects::Entity::find_by_id(*id).one(conn).await? {
            Some(found) => Ok(Some(found)),
            None => find_by_project_id(conn, &id.to_string()).await,
        },
        LookupKey::ProjectId(project_id) => find_by_project_id(conn, project_id).await,
    }
}

async fn find_by_project_id<C>(conn: &C, project_id: &str) -> Result<Option<projects::Model>, DbErr>
where
    C: ConnectionTrait,
{
    projects::Entity::find()
        .filter(projects::Column::ProjectId.eq(project_id))
        .one(conn)
        .await
}

pub async fn find_detail<C>(
    conn: &C,
    project_uuid: Uuid,
) -> Result<Option<project_details::Model>, DbErr>
where
    C: ConnectionTrait,
{
    project_details::Entity::find()
        .filter(project_details::Column::ProjectUuid.eq(project_uuid))
        .one(conn)
        .await
}

/// Loads children and detail for the given parents in six queries at most,
/// keeping the parents' order.
pub async fn load_views<C>(conn: &C, parents: Vec<projects::Model>) -> Result<Vec<ProjectView>, DbErr>
where
    C: ConnectionTrait,
{
    if parents.is_empty() {
        return Ok(Vec::new());
    }

    let ids: Vec<Uuid> = parents.iter().map(|p| p.id).collect();

    let mut features = group_by_parent(
        project_features::Entity::find()
            .filter(project_features::Column::ProjectUuid.is_in(ids.clone()))
            .order_by_asc(project_features::Column::FeatureId)
            .all(conn)
            .await?,
        |m| m.project_uuid,
    );
    let mut goals = group_by_parent(
        project_goals::Entity::find()
            .filter(project_goals::Column::ProjectUuid.is_in(ids.clone()))
            .order_by_asc(project_goals::Column::GoalId)
            .all(conn)
            .await?,
        |m| m.project_uuid,
    );
    let mut timeline = group_by_parent(
        project_timeline::Entity::find()
            .filter(project_timeline::Column::ProjectUuid.is_in(ids.clone()))
            .order_by_asc(project_timeline::Column::TimelineId)
            .all(conn)
            .await?,
        |m| m.project_uuid,
    );
    let mut members = group_by_parent(
        team_members::Entity::find()
            .filter(team_members::Column::ProjectUuid.is_in(ids.clone()))
            .order_by_asc(team_members::Column::MemberId)
            .all(conn)
            .await?,
        |m| m.project_uuid,
    );
    let mut details: HashMap<Uuid, project_details::Model> = project_details::Entity::find()
        .filter(project_details::Column::ProjectUuid.is_in(ids))
        .all(conn)
        .await?
        .into_iter()
        .map(|d| (d.project_uuid, d))
        .collect();

    Ok(parents
        .into_iter()
        .map(|parent| {
            let id = parent.id;
            to_view(
                parent,
                features.remove(&id).unwrap_or_default(),
                goals.remove(&id).unwrap_or_default(),
                timeline.remove(&id).unwrap_or_default(),
                members.remove(&id).unwrap_or_default(),
                details.remove(&id),
            )
        })
        .collect())
}

fn group_by_parent<M, F>(rows: Vec<M>, parent: F) -> HashMap<Uuid, Vec<M>>
where
    F: Fn(&M) -> Uuid,
{
    let mut grouped: HashMap<Uuid, Vec<M>> = HashMap::new();
    for row in rows {
        grouped.entry(parent(&row)).or_default().push(row);
    }
    grouped
}

// ============================================================================
// Model -> view
// ============================================================================

pub fn detail_item(
    owner: &str,
    detail: &project_details::Model,
    diagnostics: &mut Diagnostics,
) -> ProjectDetailItem {
    ProjectDetailItem {
        project_images: diagnostics.take(
            owner,
            "project_images",
            json_text::decode(Some(&detail.project_images)),
        ),
        project_flowchart: diagnostics.take(
            owner,
            "project_flowchart",
            json_text::decode::<Flowchart>(detail.project_flowchart.as_deref()),
        ),
    }
}

pub fn detail_view(
    project: &projects::Model,
    detail: Option<&project_details::Model>,
) -> ProjectDetailView {
    let mut diagnostics = Diagnostics::default();
    let item = detail
        .map(|d| detail_item(&project.project_id, d, &mut diagnostics))
        .unwrap_or_default();

    ProjectDetailView {
        project_id: project.project_id.clone(),
        project_images: item.project_images,
        project_flowchart: item.project_flowchart,
        diagnostics: diagnostics.into_vec(),
    }
}

pub fn to_view(
    parent: projects::Model,
    features: Vec<project_features::Model>,
    goals: Vec<project_goals::Model>,
    timeline: Vec<project_timeline::Model>,
    members: Vec<team_members::Model>,
    detail: Option<project_details::Model>,
) -> ProjectView {
    let mut diagnostics = Diagnostics::default();
    let owner = parent.project_id.clone();

    let project_tech_stacks = diagnostics.take(
        &owner,
        "project_tech_stacks",
        json_text::decode(Some(&parent.project_tech_stacks)),
    );
    let technical_specifications = diagnostics.take(
        &owner,
        "technical_specifications",
        json_text::decode_optional(parent.technical_specifications.as_deref()),
    );
    let project_detail = detail
        .as_ref()
        .map(|d| detail_item(&owner, d, &mut diagnostics));

    ProjectView {
        id: parent.id,
        project_id: parent.project_id,
        project_title: parent.project_title,
        project_subtitle: parent.project_subtitle,
        project_cover_img: parent.project_cover_img,
        project_description: parent.project_description,
        project_tech_stacks,
        technical_specifications,
        project_link: parent.project_link,
        github_link: parent.github_link,
        project_status: parent.project_status,
        personal: parent.personal,
        is_details: parent.is_details,
        project_features: features
            .into_iter()
            .map(|f| FeatureItem {
                feature_id: f.feature_id,
                feature_name: f.feature_name,
                feature_description: f.feature_description,
            })
            .collect(),
        project_goals: goals
            .into_iter()
            .map(|g| GoalItem {
                goal_id: g.goal_id,
                goal_name: g.goal_name,
                goal_description: g.goal_description,
            })
            .collect(),
        project_timeline: timeline
            .into_iter()
            .map(|t| TimelineItem {
                timeline_id: t.timeline_id,
                timeline_name: t.timeline_name,
                timeline_description: t.timeline_description,
            })
            .collect(),
        team_members: members
            .into_iter()
            .map(|m| TeamMemberItem {
                member_id: m.member_id,
                member_name: m.member_name,
                member_role: m.member_role,
            })
            .collect(),
        project_detail,
        diagnostics: diagnostics.into_vec(),
        created_at: parent.created_at.into(),
        updated_at: parent.updated_at.into(),
    }
}
