mod project_query_postgres;
mod project_repository_postgres;
mod project_rows;
pub mod sea_orm_entity;

pub use project_query_postgres::ProjectQueryPostgres;
pub use project_repository_postgres::ProjectRepositoryPostgres;
