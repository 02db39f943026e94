//! Project service for the portfolio listing

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::project::{NewProject, Project, ProjectRepository};
use crate::domain::DomainError;

/// Project service wrapping a repository
#[derive(Debug)]
pub struct ProjectService<R: ProjectRepository + ?Sized> {
    repository: Arc<R>,
}

impl<R: ProjectRepository + ?Sized> ProjectService<R> {
    /// Create a new project service
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// List every project, newest first
    pub async fn list(&self) -> Result<Vec<Project>, DomainError> {
        let projects = self.repository.list().await?;
        debug!(count = projects.len(), "Listed projects");
        Ok(projects)
    }

    /// Store a new project
    pub async fn create(&self, project: NewProject) -> Result<Project, DomainError> {
        info!(title = %project.title(), "Creating project");
        self.repository.create(project).await
    }
}
