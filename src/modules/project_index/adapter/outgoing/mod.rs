mod project_index_repo_postgres;
pub mod sea_orm_entity;

pub use project_index_repo_postgres::ProjectIndexRepositoryPostgres;
