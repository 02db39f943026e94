//! Contact service: validate, then persist

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::message::{ContactSubmission, Message, MessageRepository};
use crate::domain::DomainError;

/// Contact service wrapping a message repository
#[derive(Debug)]
pub struct ContactService<R: MessageRepository + ?Sized> {
    repository: Arc<R>,
}

impl<R: MessageRepository + ?Sized> ContactService<R> {
    /// Create a new contact service
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Validate a submission and store the trimmed message
    ///
    /// Nothing is stored when validation fails.
    pub async fn submit(&self, submission: &ContactSubmission) -> Result<Message, DomainError> {
        info!(
            name = ?submission.name,
            email = ?submission.email,
            message_length = ?submission.message_len(),
            "Contact form received"
        );

        let message = submission.validate().map_err(|e| {
            debug!(reason = %e, "Contact submission rejected");
            DomainError::validation(e.to_string())
        })?;

        let stored = self.repository.create(message).await?;
        info!(message_id = %stored.id(), "Contact message stored");

        Ok(stored)
    }
}
