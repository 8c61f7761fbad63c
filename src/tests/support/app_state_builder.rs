use actix_web::web;
use std::sync::Arc;

use crate::modules::achievement::application::achievement_use_cases::AchievementUseCases;
use crate::modules::achievement::application::ports::incoming::use_cases::{
    CreateAchievementUseCase, DeleteAchievementUseCase, FetchAchievementUseCase,
    FetchAchievementsUseCase, UpdateAchievementUseCase,
};
use crate::modules::multimedia::application::ports::outgoing::ImageUploader;
use crate::modules::project::application::ports::incoming::use_cases::{
    CreateProjectUseCase, DeleteProjectDetailUseCase, DeleteProjectUseCase,
    GetProjectDetailUseCase, GetProjectsUseCase, GetSingleProjectUseCase, UpdateProjectUseCase,
    UpsertProjectDetailUseCase,
};
use crate::modules::project::application::project_use_cases::ProjectUseCases;
use crate::modules::project_index::application::project_index_use_cases::ProjectIndexUseCases;
use crate::modules::project_index::application::use_cases::{
    ICreateProjectIndexUseCase, IDeleteProjectIndexUseCase, IFetchProjectIndexUseCase,
    IFetchProjectIndexesUseCase, IUpdateProjectIndexUseCase,
};
use crate::tests::support::stubs::{RecordingImageUploader, Unused};
use crate::AppState;

/// Builds an `AppState` whose use cases panic unless overridden.
pub struct TestAppStateBuilder {
    project: ProjectUseCases,
    project_index: ProjectIndexUseCases,
    achievement: AchievementUseCases,
    image_uploader: Arc<dyn ImageUploader + Send + Sync>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        let unused = Arc::new(Unused);
        Self {
            project: ProjectUseCases {
                create: unused.clone(),
                get_list: unused.clone(),
                get_single: unused.clone(),
                update: unused.clone(),
                delete: unused.clone(),
                get_detail: unused.clone(),
                upsert_detail: unused.clone(),
                delete_detail: unused.clone(),
            },
            project_index: ProjectIndexUseCases {
                list: unused.clone(),
                get: unused.clone(),
                create: unused.clone(),
                update: unused.clone(),
                delete: unused.clone(),
            },
            achievement: AchievementUseCases {
                list: unused.clone(),
                get: unused.clone(),
                create: unused.clone(),
                update: unused.clone(),
                delete: unused,
            },
            image_uploader: Arc::new(RecordingImageUploader::default()),
        }
    }
}

impl TestAppStateBuilder {
    // Projects

    pub fn with_create_project(mut self, uc: impl CreateProjectUseCase + 'static) -> Self {
        self.project.create = Arc::new(uc);
        self
    }

    pub fn with_get_projects(mut self, uc: impl GetProjectsUseCase + 'static) -> Self {
        self.project.get_list = Arc::new(uc);
        self
    }

    pub fn with_get_single_project(mut self, uc: impl GetSingleProjectUseCase + 'static) -> Self {
        self.project.get_single = Arc::new(uc);
        self
    }

    pub fn with_update_project(mut self, uc: impl UpdateProjectUseCase + 'static) -> Self {
        self.project.update = Arc::new(uc);
        self
    }

    pub fn with_delete_project(mut self, uc: impl DeleteProjectUseCase + 'static) -> Self {
        self.project.delete = Arc::new(uc);
        self
    }

    pub fn with_get_project_detail(mut self, uc: impl GetProjectDetailUseCase + 'static) -> Self {
        self.project.get_detail = Arc::new(uc);
        self
    }

    pub fn with_upsert_project_detail(
        mut self,
        uc: impl UpsertProjectDetailUseCase + 'static,
    ) -> Self {
        self.project.upsert_detail = Arc::new(uc);
        self
    }

    pub fn with_delete_project_detail(
        mut self,
        uc: impl DeleteProjectDetailUseCase + 'static,
    ) -> Self {
        self.project.delete_detail = Arc::new(uc);
        self
    }

    // Project index

    pub fn with_list_project_indexes(
        mut self,
        uc: impl IFetchProjectIndexesUseCase + 'static,
    ) -> Self {
        self.project_index.list = Arc::new(uc);
        self
    }

    pub fn with_get_project_index(mut self, uc: impl IFetchProjectIndexUseCase + 'static) -> Self {
        self.project_index.get = Arc::new(uc);
        self
    }

    pub fn with_create_project_index(
        mut self,
        uc: impl ICreateProjectIndexUseCase + 'static,
    ) -> Self {
        self.project_index.create = Arc::new(uc);
        self
    }

    pub fn with_update_project_index(
        mut self,
        uc: impl IUpdateProjectIndexUseCase + 'static,
    ) -> Self {
        self.project_index.update = Arc::new(uc);
        self
    }

    pub fn with_delete_project_index(
        mut self,
        uc: impl IDeleteProjectIndexUseCase + 'static,
    ) -> Self {
        self.project_index.delete = Arc::new(uc);
        self
    }

    // Achievements

    pub fn with_list_achievements(mut self, uc: impl FetchAchievementsUseCase + 'static) -> Self {
        self.achievement.list = Arc::new(uc);
        self
    }

    pub fn with_get_achievement(mut self, uc: impl FetchAchievementUseCase + 'static) -> Self {
        self.achievement.get = Arc::new(uc);
        self
    }

    pub fn with_create_achievement(mut self, uc: impl CreateAchievementUseCase + 'static) -> Self {
        self.achievement.create = Arc::new(uc);
        self
    }

    pub fn with_update_achievement(mut self, uc: impl UpdateAchievementUseCase + 'static) -> Self {
        self.achievement.update = Arc::new(uc);
        self
    }

    pub fn with_delete_achievement(mut self, uc: impl DeleteAchievementUseCase + 'static) -> Self {
        self.achievement.delete = Arc::new(uc);
        self
    }

    pub fn with_image_uploader(mut self, uploader: Arc<dyn ImageUploader + Send + Sync>) -> Self {
        self.image_uploader = uploader;
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            project: self.project,
            project_index: self.project_index,
            achievement: self.achievement,
            image_uploader: self.image_uploader,
        })
    }
}
