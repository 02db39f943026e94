//! Project infrastructure module
//!
//! PostgreSQL and in-memory repositories plus the listing service.

mod postgres_repository;
mod repository;
mod service;

pub use postgres_repository::PostgresProjectRepository;
pub use repository::InMemoryProjectRepository;
pub use service::ProjectService;
