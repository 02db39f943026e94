//! In-memory project repository implementation

use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::project::{NewProject, Project, ProjectId, ProjectRepository};
use crate::domain::DomainError;

#[derive(Debug, Default)]
struct ProjectTable {
    rows: Vec<Project>,
    next_id: i32,
}

/// In-memory implementation of ProjectRepository
#[derive(Debug, Default)]
pub struct InMemoryProjectRepository {
    table: Arc<RwLock<ProjectTable>>,
}

impl InMemoryProjectRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProjectRepository for InMemoryProjectRepository {
    async fn list(&self) -> Result<Vec<Project>, DomainError> {
        let table = self.table.read().await;
        let mut projects = table.rows.clone();

        projects.sort_by(|a, b| {
            b.created_at()
                .cmp(&a.created_at())
                .then_with(|| b.id().cmp(&a.id()))
        });

        Ok(projects)
    }

    async fn create(&self, project: NewProject) -> Result<Project, DomainError> {
        let mut table = self.table.write().await;

        table.next_id += 1;
        let project = project.into_project(ProjectId::new(table.next_id), Utc::now());
        table.rows.push(project.clone());

        Ok(project)
    }

    async fn count(&self) -> Result<usize, DomainError> {
        Ok(self.table.read().await.rows.len())
    }
}
