//! Contact message infrastructure module
//!
//! PostgreSQL and in-memory repositories plus the contact service.

mod postgres_repository;
mod repository;
mod service;

pub use postgres_repository::PostgresMessageRepository;
pub use repository::InMemoryMessageRepository;
pub use service::ContactService;
