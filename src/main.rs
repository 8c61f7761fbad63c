pub mod api;
mod health;
pub mod modules;
pub mod shared;

#[cfg(test)]
mod tests;

use crate::api::openapi::ApiDoc;
use crate::modules::achievement::adapter::outgoing::AchievementRepositoryPostgres;
use crate::modules::achievement::application::achievement_use_cases::AchievementUseCases;
use crate::modules::achievement::application::services::{
    CreateAchievementService, DeleteAchievementService, FetchAchievementService,
    FetchAchievementsService, UpdateAchievementService,
};
use crate::modules::auth::application::ports::incoming::ApiKeyVerifier;
use crate::modules::auth::application::services::api_key::ApiKeyGate;
use crate::modules::multimedia::adapter::outgoing::LocalDiskImageUploader;
use crate::modules::multimedia::application::ports::outgoing::ImageUploader;
use crate::modules::project::adapter::outgoing::{ProjectQueryPostgres, ProjectRepositoryPostgres};
use crate::modules::project::application::project_use_cases::ProjectUseCases;
use crate::modules::project::application::service::{
    CreateProjectService, DeleteProjectDetailService, DeleteProjectService,
    GetProjectDetailService, GetProjectsService, GetSingleProjectService, UpdateProjectService,
    UpsertProjectDetailService,
};
use crate::modules::project_index::adapter::outgoing::ProjectIndexRepositoryPostgres;
use crate::modules::project_index::application::project_index_use_cases::ProjectIndexUseCases;
use crate::modules::project_index::application::use_cases::{
    CreateProjectIndexUseCase, DeleteProjectIndexUseCase, FetchProjectIndexUseCase,
    FetchProjectIndexesUseCase, UpdateProjectIndexUseCase,
};
use crate::shared::api::custom_json_config;
use crate::shared::config::AppConfig;

use actix_web::middleware::Logger;
use actix_web::{get, web, App, HttpResponse, HttpServer, Responder};
use anyhow::Context;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;

#[derive(Clone)]
pub struct AppState {
    pub project: ProjectUseCases,
    pub project_index: ProjectIndexUseCases,
    pub achievement: AchievementUseCases,
    pub image_uploader: Arc<dyn ImageUploader + Send + Sync>,
}

impl AppState {
    /// Wires every use case to the Postgres adapters and the disk uploader.
    fn wire(
        db: &Arc<DatabaseConnection>,
        image_uploader: Arc<dyn ImageUploader + Send + Sync>,
    ) -> Self {
        let project_repo = ProjectRepositoryPostgres::new(Arc::clone(db));
        let project_query = ProjectQueryPostgres::new(Arc::clone(db));
        let index_repo = ProjectIndexRepositoryPostgres::new(Arc::clone(db));
        let achievement_repo = AchievementRepositoryPostgres::new(Arc::clone(db));

        Self {
            project: ProjectUseCases {
                create: Arc::new(CreateProjectService::new(project_repo.clone())),
                get_list: Arc::new(GetProjectsService::new(project_query.clone())),
                get_single: Arc::new(GetSingleProjectService::new(project_query.clone())),
                update: Arc::new(UpdateProjectService::new(project_repo.clone())),
                delete: Arc::new(DeleteProjectService::new(project_repo.clone())),
                get_detail: Arc::new(GetProjectDetailService::new(project_query)),
                upsert_detail: Arc::new(UpsertProjectDetailService::new(project_repo.clone())),
                delete_detail: Arc::new(DeleteProjectDetailService::new(project_repo)),
            },
            project_index: ProjectIndexUseCases {
                list: Arc::new(FetchProjectIndexesUseCase::new(index_repo.clone())),
                get: Arc::new(FetchProjectIndexUseCase::new(index_repo.clone())),
                create: Arc::new(CreateProjectIndexUseCase::new(index_repo.clone())),
                update: Arc::new(UpdateProjectIndexUseCase::new(index_repo.clone())),
                delete: Arc::new(DeleteProjectIndexUseCase::new(index_repo)),
            },
            achievement: AchievementUseCases {
                list: Arc::new(FetchAchievementsService::new(achievement_repo.clone())),
                get: Arc::new(FetchAchievementService::new(achievement_repo.clone())),
                create: Arc::new(CreateAchievementService::new(
                    achievement_repo.clone(),
                    Arc::clone(&image_uploader),
                )),
                update: Arc::new(UpdateAchievementService::new(
                    achievement_repo.clone(),
                    Arc::clone(&image_uploader),
                )),
                delete: Arc::new(DeleteAchievementService::new(achievement_repo)),
            },
            image_uploader,
        }
    }
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    AppConfig::load_dotenv();
    let config = AppConfig::from_env().context("invalid configuration")?;

    // Database connection
    let mut opt = ConnectOptions::new(config.database_url.clone());
    opt.max_connections(config.db_max_connections)
        .min_connections(config.db_min_connections)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .context("failed to connect to database")?;

    if config.run_migrations {
        info!("Running pending migrations");
        Migrator::up(&conn, None)
            .await
            .context("failed to run migrations")?;
    }

    let db_arc = Arc::new(conn);

    let image_uploader: Arc<dyn ImageUploader + Send + Sync> = Arc::new(
        LocalDiskImageUploader::new(config.upload_dir.clone(), &config.api_url),
    );
    let state = AppState::wire(&db_arc, image_uploader);

    let key_verifier: Arc<dyn ApiKeyVerifier + Send + Sync> =
        Arc::new(ApiKeyGate::new(&config.app_key));

    let server_url = config.server_url();
    info!(url = %server_url, public_url = %config.api_url, "Server listening");

    let db_for_server = Arc::clone(&db_arc);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&key_verifier)))
            .app_data(web::Data::new(Arc::clone(&db_for_server)))
            .app_data(custom_json_config())
            .configure(init_routes)
    })
    .bind(&server_url)
    .with_context(|| format!("failed to bind {}", server_url))?
    .run()
    .await?;

    match Arc::try_unwrap(db_arc) {
        Ok(conn) => {
            info!("Server stopped, closing database pool");
            conn.close().await.context("failed to close database pool")?;
        }
        Err(_) => warn!("Database pool still referenced at shutdown, dropping it instead"),
    }

    Ok(())
}

#[get("/")]
async fn banner() -> impl Responder {
    HttpResponse::Ok().json(json!({
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "auth": "Non-GET requests require the x-api-key header",
        "endpoints": {
            "projects": "/api/projects",
            "project_detail": "/api/projects/{project_id}/detail",
            "project_index": "/api/project-index",
            "achievements": "/api/achievements",
            "uploads": "/uploads/{file_name}",
            "openapi": "/api-docs/openapi.json",
            "health": "/health",
            "ready": "/ready",
        }
    }))
}

#[get("/api-docs/openapi.json")]
async fn openapi_json() -> impl Responder {
    HttpResponse::Ok().json(ApiDoc::openapi())
}

fn init_routes(cfg: &mut web::ServiceConfig) {
    use crate::modules::achievement::adapter::incoming::web::routes as achievement;
    use crate::modules::multimedia::adapter::incoming::web::routes as uploads;
    use crate::modules::project::adapter::incoming::web::routes as project;
    use crate::modules::project_index::adapter::incoming::web::routes as project_index;

    // Health & docs
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    cfg.service(banner);
    cfg.service(openapi_json);
    // Projects
    cfg.service(project::get_project_detail_handler);
    cfg.service(project::upsert_project_detail_handler);
    cfg.service(project::delete_project_detail_handler);
    cfg.service(project::get_projects_handler);
    cfg.service(project::get_single_project_handler);
    cfg.service(project::create_project_handler);
    cfg.service(project::update_project_handler);
    cfg.service(project::delete_project_handler);
    // Project index
    cfg.service(project_index::get_project_indexes_handler);
    cfg.service(project_index::get_project_index_handler);
    cfg.service(project_index::create_project_index_handler);
    cfg.service(project_index::update_project_index_handler);
    cfg.service(project_index::delete_project_index_handler);
    // Achievements
    cfg.service(achievement::get_achievements_handler);
    cfg.service(achievement::get_achievement_handler);
    cfg.service(achievement::create_achievement_handler);
    cfg.service(achievement::update_achievement_handler);
    cfg.service(achievement::delete_achievement_handler);
    // Uploads
    cfg.service(uploads::serve_upload_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e:#}");
        std::process::exit(1);
    }
}
