//! PostgreSQL message repository implementation

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Row};

use crate::domain::message::{Message, MessageId, MessageRepository, NewMessage};
use crate::domain::DomainError;

/// PostgreSQL implementation of MessageRepository
#[derive(Debug, Clone)]
pub struct PostgresMessageRepository {
    pool: PgPool,
}

impl PostgresMessageRepository {
    /// Create a new repository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MessageRepository for PostgresMessageRepository {
    /// The insert commits only once the returned row has decoded
    async fn create(&self, message: NewMessage) -> Result<Message, DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DomainError::storage(format!("Failed to begin transaction: {}", e)))?;

        let row = sqlx::query(
            r#"
            INSERT INTO messages (name, email, message)
            VALUES ($1, $2, $3)
            RETURNING id, created_at
            "#,
        )
        .bind(message.name())
        .bind(message.email())
        .bind(message.message())
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to store message: {}", e)))?;

        let id: i32 = row
            .try_get("id")
            .map_err(|e| DomainError::storage(format!("Invalid message id: {}", e)))?;
        let created_at: DateTime<Utc> = row
            .try_get("created_at")
            .map_err(|e| DomainError::storage(format!("Invalid message timestamp: {}", e)))?;

        tx.commit()
            .await
            .map_err(|e| DomainError::storage(format!("Failed to commit message: {}", e)))?;

        Ok(message.into_message(MessageId::new(id), created_at))
    }
}
