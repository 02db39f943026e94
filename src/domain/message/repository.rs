//! Message repository trait

use async_trait::async_trait;

use super::entity::{Message, NewMessage};
use crate::domain::DomainError;

/// Write-only repository for contact messages
#[async_trait]
pub trait MessageRepository: Send + Sync + std::fmt::Debug {
    /// Persist a validated message
    async fn create(&self, message: NewMessage) -> Result<Message, DomainError>;
}
