pub mod create_project_index;
pub mod delete_project_index;
pub mod fetch_project_index;
pub mod fetch_project_indexes;
pub mod update_project_index;

pub use create_project_index::{
    CreateProjectIndexError, CreateProjectIndexUseCase, ICreateProjectIndexUseCase,
};
pub use delete_project_index::{
    DeleteProjectIndexError, DeleteProjectIndexUseCase, IDeleteProjectIndexUseCase,
};
pub use fetch_project_index::{
    FetchProjectIndexError, FetchProjectIndexUseCase, IFetchProjectIndexUseCase,
};
pub use fetch_project_indexes::{
    FetchProjectIndexesError, FetchProjectIndexesUseCase, IFetchProjectIndexesUseCase,
};
pub use update_project_index::{
    IUpdateProjectIndexUseCase, UpdateProjectIndexError, UpdateProjectIndexUseCase,
};
