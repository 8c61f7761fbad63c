pub mod project_index_repository;

pub use project_index_repository::{
    CreateProjectIndexData, ProjectIndexRepository, ProjectIndexRepositoryError,
    UpdateProjectIndexData,
};
