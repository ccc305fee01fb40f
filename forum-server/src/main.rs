use std::sync::Arc;

use anyhow::Result;

mod application;
mod data;
mod domain;
mod infrastructure;
mod presentation;
mod server;

use application::directory_service::DirectoryService;
use application::forum_service::ForumService;
use data::repositories::postgres::post_repository::PostgresPostRepository;
use data::repositories::postgres::user_repository::PostgresUserRepository;
use infrastructure::database::{create_pool, run_migrations};
use infrastructure::logging::init_logging;
use infrastructure::settings::Settings;
use presentation::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let settings = Settings::from_env()?;

    init_logging(&settings.log_level)?;

    let pool = create_pool(&settings.database_url).await?;
    run_migrations(&pool).await?;

    let directory_service = Arc::new(DirectoryService::new(PostgresUserRepository::new(
        pool.clone(),
    )));
    let forum_service = Arc::new(ForumService::new(PostgresPostRepository::new(pool)));

    let state = AppState::new(directory_service, forum_service);

    server::run_http(&settings, state).await
}
