pub mod modules;
pub use modules::auth;
pub use modules::media;
pub mod health;
pub mod shared;

use crate::media::adapter::outgoing::db::MediaRepositoryPostgres;
use crate::media::adapter::outgoing::fs::LocalFileStorage;
use crate::media::application::domain::policies::access_policy::RoleMediaAccessPolicy;
use crate::media::application::services::{
    CreateMediaService, EditMediaService, GetMediaListService, GetMediaService,
    RemoveMediaService,
};
use crate::media::MediaUseCases;

use actix_web::{web, App, HttpServer};
use sea_orm::{ConnectOptions, Database};
use std::env;
use std::sync::Arc;
use std::time::Duration;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub media: MediaUseCases,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // Environment variable loading
    let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    // Try .env.{environment} first, then fall back to .env
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    // Load Env. variables
    let db_url = env::var("DATABASE_URL").expect("DATABASE_URL is not set in .env file");
    let host = env::var("HOST").expect("HOST is not set in .env file");
    let port = env::var("PORT").expect("PORT is not set in .env file");
    let storage_root =
        env::var("MEDIA_STORAGE_ROOT").expect("MEDIA_STORAGE_ROOT is not set in .env file");

    let server_url = format!("{host}:{port}");
    println!("Server run on: {}", server_url);

    // Database connection
    let mut opt = ConnectOptions::new(db_url);
    opt.max_connections(50)
        .min_connections(10)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .expect("Failed to connect to database");

    let db_arc = Arc::new(conn);

    // Adapters
    let media_repo = MediaRepositoryPostgres::new(Arc::clone(&db_arc));
    let file_storage = LocalFileStorage::new(storage_root);
    let policy = RoleMediaAccessPolicy::new();

    // Use cases
    let media = MediaUseCases {
        create_media: Arc::new(CreateMediaService::new(
            media_repo.clone(),
            file_storage.clone(),
            policy,
        )),
        edit_media: Arc::new(EditMediaService::new(media_repo.clone(), policy)),
        get_media: Arc::new(GetMediaService::new(media_repo.clone(), policy)),
        get_media_list: Arc::new(GetMediaListService::new(media_repo.clone(), policy)),
        remove_media: Arc::new(RemoveMediaService::new(media_repo, file_storage, policy)),
    };

    let state = AppState { media };

    // Clone db_arc for use in HttpServer closure
    let db_for_server = Arc::clone(&db_arc);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&db_for_server)))
            .configure(init_routes)
    })
    .bind(server_url)?
    .run()
    .await
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Media
    cfg.service(crate::media::adapter::incoming::web::routes::create_media_handler);
    cfg.service(crate::media::adapter::incoming::web::routes::list_media_handler);
    cfg.service(crate::media::adapter::incoming::web::routes::get_media_handler);
    cfg.service(crate::media::adapter::incoming::web::routes::edit_media_handler);
    cfg.service(crate::media::adapter::incoming::web::routes::remove_media_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
