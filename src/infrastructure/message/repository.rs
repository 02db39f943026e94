//! In-memory message repository implementation

use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::message::{Message, MessageId, MessageRepository, NewMessage};
use crate::domain::DomainError;

/// In-memory implementation of MessageRepository
#[derive(Debug, Default)]
pub struct InMemoryMessageRepository {
    messages: Arc<RwLock<Vec<Message>>>,
}

impl InMemoryMessageRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of every stored message, in insertion order
    pub async fn snapshot(&self) -> Vec<Message> {
        self.messages.read().await.clone()
    }
}

#[async_trait]
impl MessageRepository for InMemoryMessageRepository {
    async fn create(&self, message: NewMessage) -> Result<Message, DomainError> {
        let mut messages = self.messages.write().await;

        let id = MessageId::new(messages.len() as i32 + 1);
        let message = message.into_message(id, Utc::now());
        messages.push(message.clone());

        Ok(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::message::ContactSubmission;

    #[tokio::test]
    async fn test_create_and_snapshot() {
        let repo = InMemoryMessageRepository::new();
        let message = ContactSubmission::new("Ada", "ada@example.com", "Hello from the tests")
            .validate()
            .unwrap();

        let stored = repo.create(message).await.unwrap();
        assert_eq!(stored.id().value(), 1);

        let all = repo.snapshot().await;
        assert_eq!(all, vec![stored]);
    }
}
