//! Storage infrastructure - pool, schema, seed data and backend selection

mod factory;
pub mod migrations;
mod postgres;
mod seed;

#[cfg(test)]
pub(crate) mod test_db;

pub use factory::{Repositories, RepositoryFactory, StorageType};
pub use migrations::{portfolio_migrations, run_migrations, Migration, PostgresMigrator};
pub use postgres::{check_connection, connect_pool, PostgresConfig};
pub use seed::{sample_projects, seed_projects};
