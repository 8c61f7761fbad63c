//! Canned ports shared by the service tests.

use async_trait::async_trait;
use chrono::Utc;
use std::sync::Mutex;
use uuid::Uuid;

use crate::modules::project::application::ports::outgoing::project_query::{
    ProjectDetailView, ProjectQuery, ProjectQueryError, ProjectView,
};
use crate::modules::project::application::ports::outgoing::project_repository::{
    CreateProjectData, ProjectRepository, ProjectRepositoryError, UpdateProjectData,
    UpsertProjectDetailData, UpsertedProjectDetail,
};
use crate::shared::lookup_key::LookupKey;

pub fn sample_view(project_id: &str) -> ProjectView {
    ProjectView {
        id: Uuid::new_v4(),
        project_id: project_id.to_string(),
        project_title: "Demo".to_string(),
        project_subtitle: None,
        project_cover_img: None,
        project_description: None,
        project_tech_stacks: vec!["Go".to_string(), "SQL".to_string()],
        technical_specifications: None,
        project_link: None,
        github_link: None,
        project_status: None,
        personal: false,
        is_details: false,
        project_features: vec![],
        project_goals: vec![],
        project_timeline: vec![],
        team_members: vec![],
        project_detail: None,
        diagnostics: vec![],
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

/// Read side returning preset results.
pub struct MockProjectQuery {
    pub list: Result<Vec<ProjectView>, ProjectQueryError>,
    pub single: Result<ProjectView, ProjectQueryError>,
    pub detail: Result<ProjectDetailView, ProjectQueryError>,
}

impl Default for MockProjectQuery {
    fn default() -> Self {
        Self {
            list: Ok(vec![]),
            single: Err(ProjectQueryError::NotFound),
            detail: Err(ProjectQueryError::NotFound),
        }
    }
}

#[async_trait]
impl ProjectQuery for MockProjectQuery {
    async fn list(&self) -> Result<Vec<ProjectView>, ProjectQueryError> {
        self.list.clone()
    }

    async fn get(&self, _key: &LookupKey) -> Result<ProjectView, ProjectQueryError> {
        self.single.clone()
    }

    async fn get_detail(&self, _key: &LookupKey) -> Result<ProjectDetailView, ProjectQueryError> {
        self.detail.clone()
    }
}

/// Write side returning preset results and recording what it was given.
pub struct MockProjectRepository {
    pub view: Result<ProjectView, ProjectRepositoryError>,
    pub unit: Result<(), ProjectRepositoryError>,
    pub upsert: Result<UpsertedProjectDetail, ProjectRepositoryError>,
    pub created_with: Mutex<Option<CreateProjectData>>,
    pub updated_with: Mutex<Option<UpdateProjectData>>,
    pub calls: Mutex<u32>,
}

impl Default for MockProjectRepository {
    fn default() -> Self {
        Self {
            view: Ok(sample_view("p1")),
            unit: Ok(()),
            upsert: Ok(UpsertedProjectDetail {
                created: true,
                detail: ProjectDetailView {
                    project_id: "p1".to_string(),
                    ..Default::default()
                },
            }),
            created_with: Mutex::new(None),
            updated_with: Mutex::new(None),
            calls: Mutex::new(0),
        }
    }
}

impl MockProjectRepository {
    pub fn failing(err: ProjectRepositoryError) -> Self {
        Self {
            view: Err(err.clone()),
            unit: Err(err.clone()),
            upsert: Err(err),
            ..Default::default()
        }
    }

    pub fn call_count(&self) -> u32 {
        *self.calls.lock().unwrap()
    }

    fn hit(&self) {
        *self.calls.lock().unwrap() += 1;
    }
}

#[async_trait]
impl ProjectRepository for MockProjectRepository {
    async fn create_project(
        &self,
        data: CreateProjectData,
    ) -> Result<ProjectView, ProjectRepositoryError> {
        self.hit();
        *self.created_with.lock().unwrap() = Some(data);
        self.view.clone()
    }

    async fn update_project(
        &self,
        _key: &LookupKey,
        data: UpdateProjectData,
    ) -> Result<ProjectView, ProjectRepositoryError> {
        self.hit();
        *self.updated_with.lock().unwrap() = Some(data);
        self.view.clone()
    }

    async fn delete_project(&self, _key: &LookupKey) -> Result<(), ProjectRepositoryError> {
        self.hit();
        self.unit.clone()
    }

    async fn upsert_detail(
        &self,
        _key: &LookupKey,
        _data: UpsertProjectDetailData,
    ) -> Result<UpsertedProjectDetail, ProjectRepositoryError> {
        self.hit();
        self.upsert.clone()
    }

    async fn delete_detail(&self, _key: &LookupKey) -> Result<(), ProjectRepositoryError> {
        self.hit();
        self.unit.clone()
    }
}
