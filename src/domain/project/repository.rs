//! Project repository trait

use async_trait::async_trait;

use super::entity::{NewProject, Project};
use crate::domain::DomainError;

/// Repository for reading and inserting projects
#[async_trait]
pub trait ProjectRepository: Send + Sync + std::fmt::Debug {
    /// List all projects, newest first
    async fn list(&self) -> Result<Vec<Project>, DomainError>;

    /// Insert a project; the store assigns id and creation time
    async fn create(&self, project: NewProject) -> Result<Project, DomainError>;

    /// Count stored projects
    async fn count(&self) -> Result<usize, DomainError>;
}
