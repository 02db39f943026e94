//! Portfolio API
//!
//! Backend for a personal portfolio site:
//! - Project listing, newest first
//! - Validated contact form submissions
//! - PostgreSQL or in-memory storage

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use api::state::AppState;
use config::DatabaseConfig;
use domain::DomainError;
use infrastructure::storage::{
    check_connection, connect_pool, run_migrations, seed_projects, PostgresConfig,
    RepositoryFactory, StorageType,
};
use sqlx::PgPool;
use tracing::info;

/// Application state together with the pool backing it, if any
pub struct AppContext {
    pub state: AppState,
    pub pool: Option<PgPool>,
}

impl AppContext {
    /// Close the pool, if one is open
    pub async fn close(self) {
        if let Some(pool) = self.pool {
            pool.close().await;
            info!("Database pool closed");
        }
    }
}

/// Parse the configured storage backend
pub fn storage_type(config: &DatabaseConfig) -> Result<StorageType, DomainError> {
    StorageType::from_str(&config.backend).ok_or_else(|| {
        DomainError::configuration(format!("Unknown storage backend: {}", config.backend))
    })
}

/// Open the pool and verify the database answers
pub async fn connect_database(config: &DatabaseConfig) -> anyhow::Result<PgPool> {
    info!("Connecting to PostgreSQL...");
    let pool = connect_pool(&PostgresConfig::from(config)).await?;

    check_connection(&pool).await?;

    Ok(pool)
}

/// Create the application state for the configured backend
///
/// PostgreSQL is connected and migrated before any request is served.
/// The in-memory backend starts with the sample projects.
pub async fn create_app_context(config: &AppConfig) -> anyhow::Result<AppContext> {
    let backend = storage_type(&config.database)?;
    info!("Storage backend: {}", backend);

    match backend {
        StorageType::Postgres => {
            let pool = connect_database(&config.database).await?;

            run_migrations(&pool).await?;

            let state = AppState::from_repositories(RepositoryFactory::postgres(pool.clone()));

            Ok(AppContext {
                state,
                pool: Some(pool),
            })
        }
        StorageType::InMemory => {
            let repositories = RepositoryFactory::in_memory();
            seed_projects(repositories.projects.as_ref()).await?;

            Ok(AppContext {
                state: AppState::from_repositories(repositories),
                pool: None,
            })
        }
    }
}
