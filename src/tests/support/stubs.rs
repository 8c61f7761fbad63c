use std::sync::Mutex;

use async_trait::async_trait;

use crate::modules::achievement::application::ports::incoming::use_cases::{
    AchievementForm, CreateAchievementUseCase, DeleteAchievementError, DeleteAchievementUseCase,
    FetchAchievementError, FetchAchievementUseCase, FetchAchievementsError,
    FetchAchievementsUseCase, SaveAchievementError, UpdateAchievementUseCase,
};
use crate::modules::achievement::domain::entities::Achievement;
use crate::modules::multimedia::application::ports::outgoing::{
    ImageFile, ImageUploadError, ImageUploader, StoredImage,
};
use crate::modules::project::application::ports::incoming::use_cases::{
    CreateProjectError, CreateProjectUseCase, DeleteProjectDetailError,
    DeleteProjectDetailUseCase, DeleteProjectError, DeleteProjectUseCase, GetProjectDetailError,
    GetProjectDetailUseCase, GetProjectsError, GetProjectsUseCase, GetSingleProjectError,
    GetSingleProjectUseCase, UpdateProjectError, UpdateProjectUseCase, UpsertProjectDetailError,
    UpsertProjectDetailUseCase,
};
use crate::modules::project::application::ports::outgoing::project_query::{
    ProjectDetailView, ProjectView,
};
use crate::modules::project::application::ports::outgoing::project_repository::{
    CreateProjectData, UpdateProjectData, UpsertProjectDetailData, UpsertedProjectDetail,
};
use crate::modules::project_index::application::ports::outgoing::{
    CreateProjectIndexData, UpdateProjectIndexData,
};
use crate::modules::project_index::application::use_cases::{
    CreateProjectIndexError, DeleteProjectIndexError, FetchProjectIndexError,
    FetchProjectIndexesError, ICreateProjectIndexUseCase, IDeleteProjectIndexUseCase,
    IFetchProjectIndexUseCase, IFetchProjectIndexesUseCase, IUpdateProjectIndexUseCase,
    UpdateProjectIndexError,
};
use crate::modules::project_index::domain::entities::ProjectIndex;
use crate::shared::lookup_key::LookupKey;

/// Fills every use case slot a test does not override.
#[derive(Default, Clone)]
pub struct Unused;

// ============================================================================
// Projects
// ============================================================================

#[async_trait]
impl CreateProjectUseCase for Unused {
    async fn execute(&self, _data: CreateProjectData) -> Result<ProjectView, CreateProjectError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl GetProjectsUseCase for Unused {
    async fn execute(&self) -> Result<Vec<ProjectView>, GetProjectsError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl GetSingleProjectUseCase for Unused {
    async fn execute(&self, _key: &LookupKey) -> Result<ProjectView, GetSingleProjectError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl UpdateProjectUseCase for Unused {
    async fn execute(
        &self,
        _key: &LookupKey,
        _data: UpdateProjectData,
    ) -> Result<ProjectView, UpdateProjectError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl DeleteProjectUseCase for Unused {
    async fn execute(&self, _key: &LookupKey) -> Result<(), DeleteProjectError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl GetProjectDetailUseCase for Unused {
    async fn execute(&self, _key: &LookupKey) -> Result<ProjectDetailView, GetProjectDetailError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl UpsertProjectDetailUseCase for Unused {
    async fn execute(
        &self,
        _key: &LookupKey,
        _data: UpsertProjectDetailData,
    ) -> Result<UpsertedProjectDetail, UpsertProjectDetailError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl DeleteProjectDetailUseCase for Unused {
    async fn execute(&self, _key: &LookupKey) -> Result<(), DeleteProjectDetailError> {
        unimplemented!("Not used in this test")
    }
}

// ============================================================================
// Project index
// ============================================================================

#[async_trait]
impl IFetchProjectIndexesUseCase for Unused {
    async fn execute(&self) -> Result<Vec<ProjectIndex>, FetchProjectIndexesError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl IFetchProjectIndexUseCase for Unused {
    async fn execute(&self, _key: &LookupKey) -> Result<ProjectIndex, FetchProjectIndexError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl ICreateProjectIndexUseCase for Unused {
    async fn execute(
        &self,
        _data: CreateProjectIndexData,
    ) -> Result<ProjectIndex, CreateProjectIndexError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl IUpdateProjectIndexUseCase for Unused {
    async fn execute(
        &self,
        _key: &LookupKey,
        _data: UpdateProjectIndexData,
    ) -> Result<ProjectIndex, UpdateProjectIndexError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl IDeleteProjectIndexUseCase for Unused {
    async fn execute(&self, _key: &LookupKey) -> Result<(), DeleteProjectIndexError> {
        unimplemented!("Not used in this test")
    }
}

// ============================================================================
// Achievements
// ============================================================================

#[async_trait]
impl FetchAchievementsUseCase for Unused {
    async fn execute(&self) -> Result<Vec<Achievement>, FetchAchievementsError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl FetchAchievementUseCase for Unused {
    async fn execute(&self, _id: i32) -> Result<Achievement, FetchAchievementError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl CreateAchievementUseCase for Unused {
    async fn execute(&self, _form: AchievementForm) -> Result<Achievement, SaveAchievementError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl UpdateAchievementUseCase for Unused {
    async fn execute(
        &self,
        _id: i32,
        _form: AchievementForm,
    ) -> Result<Achievement, SaveAchievementError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl DeleteAchievementUseCase for Unused {
    async fn execute(&self, _id: i32) -> Result<(), DeleteAchievementError> {
        unimplemented!("Not used in this test")
    }
}

// ============================================================================
// Image uploader
// ============================================================================

/// Records uploaded file names and answers with `https://cdn.test/{name}`.
#[derive(Default)]
pub struct RecordingImageUploader {
    uploaded: Mutex<Vec<String>>,
    fail: bool,
}

impl RecordingImageUploader {
    pub fn failing() -> Self {
        Self {
            uploaded: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub fn uploaded_names(&self) -> Vec<String> {
        self.uploaded.lock().unwrap().clone()
    }
}

#[async_trait]
impl ImageUploader for RecordingImageUploader {
    async fn upload(&self, file: ImageFile) -> Result<String, ImageUploadError> {
        if self.fail {
            return Err(ImageUploadError::StorageError("disk full".to_string()));
        }
        self.uploaded.lock().unwrap().push(file.file_name.clone());
        Ok(format!("https://cdn.test/{}", file.file_name))
    }

    async fn fetch(&self, _stored_name: &str) -> Result<Option<StoredImage>, ImageUploadError> {
        Ok(None)
    }
}
