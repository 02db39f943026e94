//! Repository factory for runtime backend selection

use std::sync::Arc;

use sqlx::PgPool;

use crate::domain::message::MessageRepository;
use crate::domain::project::ProjectRepository;
use crate::infrastructure::message::{InMemoryMessageRepository, PostgresMessageRepository};
use crate::infrastructure::project::{InMemoryProjectRepository, PostgresProjectRepository};

/// Supported storage types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageType {
    /// In-memory storage (for local runs and testing)
    InMemory,
    /// PostgreSQL storage
    Postgres,
}

impl StorageType {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "memory" | "inmemory" | "in-memory" | "in_memory" => Some(Self::InMemory),
            "postgres" | "postgresql" | "pg" => Some(Self::Postgres),
            _ => None,
        }
    }
}

impl std::fmt::Display for StorageType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InMemory => write!(f, "memory"),
            Self::Postgres => write!(f, "postgres"),
        }
    }
}

/// The repositories the API needs, behind trait objects
#[derive(Debug, Clone)]
pub struct Repositories {
    pub projects: Arc<dyn ProjectRepository>,
    pub messages: Arc<dyn MessageRepository>,
}

/// Factory for creating repository sets
#[derive(Debug)]
pub struct RepositoryFactory;

impl RepositoryFactory {
    /// Repositories sharing one PostgreSQL pool
    pub fn postgres(pool: PgPool) -> Repositories {
        Repositories {
            projects: Arc::new(PostgresProjectRepository::new(pool.clone())),
            messages: Arc::new(PostgresMessageRepository::new(pool)),
        }
    }

    /// Fresh, empty in-memory repositories
    pub fn in_memory() -> Repositories {
        Repositories {
            projects: Arc::new(InMemoryProjectRepository::new()),
            messages: Arc::new(InMemoryMessageRepository::new()),
        }
    }
}
