use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::{ConnectOptions, SqlitePool};
use tracing::info;
use tracing::log::LevelFilter;

use crate::config::Config;
use crate::domain::services::auth_service::AuthService;
use crate::infra::files::disk_file_store::DiskFileStore;
use crate::infra::repositories::{
    sqlite_category_repo::SqliteCategoryRepo, sqlite_order_detail_repo::SqliteOrderDetailRepo,
    sqlite_order_repo::SqliteOrderRepo, sqlite_product_repo::SqliteProductRepo,
    sqlite_user_repo::SqliteUserRepo,
};
use crate::state::AppState;

pub async fn bootstrap_state(config: &Config) -> AppState {
    info!("Initializing SQLite connection with WAL Mode...");

    let opts = SqliteConnectOptions::from_str(&config.database_url)
        .expect("Invalid SQLite connection string")
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(Duration::from_secs(5))
        .log_statements(LevelFilter::Debug)
        .log_slow_statements(LevelFilter::Warn, Duration::from_millis(500));

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(opts)
        .await
        .expect("Failed to connect to SQLite");

    run_migrations(&pool).await;

    build_state(config, pool)
}

pub fn build_state(config: &Config, pool: SqlitePool) -> AppState {
    AppState {
        config: config.clone(),
        category_repo: Arc::new(SqliteCategoryRepo::new(pool.clone())),
        product_repo: Arc::new(SqliteProductRepo::new(pool.clone())),
        user_repo: Arc::new(SqliteUserRepo::new(pool.clone())),
        order_repo: Arc::new(SqliteOrderRepo::new(pool.clone())),
        order_detail_repo: Arc::new(SqliteOrderDetailRepo::new(pool)),
        auth_service: Arc::new(AuthService::new(config)),
        file_store: Arc::new(DiskFileStore::new(&config.upload_dir)),
    }
}

async fn run_migrations(pool: &SqlitePool) {
    sqlx::migrate!("./migrations/sqlite")
        .run(pool)
        .await
        .expect("Failed to run SQLite migrations");
}
