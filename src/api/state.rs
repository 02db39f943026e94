//! Application state for shared services

use std::sync::Arc;

use crate::domain::message::{ContactSubmission, Message, MessageRepository};
use crate::domain::project::{Project, ProjectRepository};
use crate::domain::DomainError;
use crate::infrastructure::message::ContactService;
use crate::infrastructure::project::ProjectService;
use crate::infrastructure::storage::Repositories;

/// Application state containing shared services using dynamic dispatch
#[derive(Clone)]
pub struct AppState {
    pub project_service: Arc<dyn ProjectServiceTrait>,
    pub contact_service: Arc<dyn ContactServiceTrait>,
}

impl AppState {
    pub fn new(
        project_service: Arc<dyn ProjectServiceTrait>,
        contact_service: Arc<dyn ContactServiceTrait>,
    ) -> Self {
        Self {
            project_service,
            contact_service,
        }
    }

    /// Wire the services on top of a repository set
    pub fn from_repositories(repositories: Repositories) -> Self {
        Self::new(
            Arc::new(ProjectService::new(repositories.projects)),
            Arc::new(ContactService::new(repositories.messages)),
        )
    }
}

/// Trait for project service operations
#[async_trait::async_trait]
pub trait ProjectServiceTrait: Send + Sync {
    async fn list(&self) -> Result<Vec<Project>, DomainError>;
}

/// Trait for contact service operations
#[async_trait::async_trait]
pub trait ContactServiceTrait: Send + Sync {
    async fn submit(&self, submission: &ContactSubmission) -> Result<Message, DomainError>;
}

#[async_trait::async_trait]
impl<R: ProjectRepository + ?Sized + 'static> ProjectServiceTrait for ProjectService<R> {
    async fn list(&self) -> Result<Vec<Project>, DomainError> {
        ProjectService::list(self).await
    }
}

#[async_trait::async_trait]
impl<R: MessageRepository + ?Sized + 'static> ContactServiceTrait for ContactService<R> {
    async fn submit(&self, submission: &ContactSubmission) -> Result<Message, DomainError> {
        ContactService::submit(self, submission).await
    }
}
