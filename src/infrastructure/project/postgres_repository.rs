//! PostgreSQL project repository implementation

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Row};

use crate::domain::project::{NewProject, Project, ProjectId, ProjectRepository};
use crate::domain::DomainError;

/// PostgreSQL implementation of ProjectRepository
#[derive(Debug, Clone)]
pub struct PostgresProjectRepository {
    pool: PgPool,
}

impl PostgresProjectRepository {
    /// Create a new repository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProjectRepository for PostgresProjectRepository {
    async fn list(&self) -> Result<Vec<Project>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, title, description, tech_stack, link, created_at
            FROM projects
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to list projects: {}", e)))?;

        rows.iter().map(row_to_project).collect()
    }

    async fn create(&self, project: NewProject) -> Result<Project, DomainError> {
        let row = sqlx::query(
            r#"
            INSERT INTO projects (title, description, tech_stack, link)
            VALUES ($1, $2, $3, $4)
            RETURNING id, created_at
            "#,
        )
        .bind(project.title())
        .bind(project.description())
        .bind(project.tech_stack().to_vec())
        .bind(project.link())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to create project: {}", e)))?;

        let id: i32 = row
            .try_get("id")
            .map_err(|e| DomainError::storage(format!("Invalid project id: {}", e)))?;
        let created_at: DateTime<Utc> = row
            .try_get("created_at")
            .map_err(|e| DomainError::storage(format!("Invalid project timestamp: {}", e)))?;

        Ok(project.into_project(ProjectId::new(id), created_at))
    }

    async fn count(&self) -> Result<usize, DomainError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM projects")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to count projects: {}", e)))?;

        Ok(count as usize)
    }
}

fn row_to_project(row: &sqlx::postgres::PgRow) -> Result<Project, DomainError> {
    let decode = |e: sqlx::Error| DomainError::storage(format!("Invalid project row: {}", e));

    let id: i32 = row.try_get("id").map_err(decode)?;
    let title: String = row.try_get("title").map_err(decode)?;
    let description: String = row.try_get("description").map_err(decode)?;
    let tech_stack: Vec<String> = row.try_get("tech_stack").map_err(decode)?;
    let link: Option<String> = row.try_get("link").map_err(decode)?;
    let created_at: DateTime<Utc> = row.try_get("created_at").map_err(decode)?;

    Ok(Project::from_stored(
        ProjectId::new(id),
        title,
        description,
        tech_stack,
        link,
        created_at,
    ))
}
