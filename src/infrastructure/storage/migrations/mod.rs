//! Database migrations infrastructure
//!
//! Each migration is a single SQL statement so it can run through a
//! prepared query. Applied versions are recorded in `_migrations`.

use sqlx::postgres::PgPool;
use tracing::{debug, info};

use crate::domain::DomainError;

/// PostgreSQL migrator that records applied versions
#[derive(Debug)]
pub struct PostgresMigrator {
    pool: PgPool,
}

impl PostgresMigrator {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Creates the migrations table if it doesn't exist
    async fn ensure_migrations_table(&self) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS _migrations (
                version BIGINT PRIMARY KEY,
                description TEXT NOT NULL,
                installed_on TIMESTAMPTZ NOT NULL DEFAULT NOW()
            )
            "#,
        )
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to create migrations table: {}", e)))?;

        Ok(())
    }

    async fn is_applied(&self, version: i64) -> Result<bool, DomainError> {
        sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM _migrations WHERE version = $1)")
            .bind(version)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to check migration status: {}", e)))
    }

    /// Runs a single migration; already-applied versions are skipped
    ///
    /// Returns whether the migration was applied by this call.
    pub async fn run_migration(&self, migration: &Migration) -> Result<bool, DomainError> {
        self.ensure_migrations_table().await?;

        if self.is_applied(migration.version).await? {
            debug!(version = migration.version, "Migration already applied");
            return Ok(false);
        }

        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DomainError::storage(format!("Failed to begin transaction: {}", e)))?;

        sqlx::query(&migration.up)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                DomainError::storage(format!(
                    "Failed to run migration {}: {}",
                    migration.version, e
                ))
            })?;

        sqlx::query("INSERT INTO _migrations (version, description) VALUES ($1, $2)")
            .bind(migration.version)
            .bind(&migration.description)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                DomainError::storage(format!(
                    "Failed to record migration {}: {}",
                    migration.version, e
                ))
            })?;

        tx.commit()
            .await
            .map_err(|e| DomainError::storage(format!("Failed to commit migration: {}", e)))?;

        info!(
            version = migration.version,
            description = %migration.description,
            "Applied migration"
        );

        Ok(true)
    }

    /// Returns the latest applied migration version
    pub async fn current_version(&self) -> Result<Option<i64>, DomainError> {
        self.ensure_migrations_table().await?;

        sqlx::query_scalar("SELECT MAX(version) FROM _migrations")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to get migration version: {}", e)))
    }
}

/// Represents a database migration
#[derive(Debug, Clone)]
pub struct Migration {
    /// Migration version, ascending
    pub version: i64,
    /// Human-readable description
    pub description: String,
    /// Statement to run when applying the migration
    pub up: String,
}

impl Migration {
    pub fn new(version: i64, description: impl Into<String>, up: impl Into<String>) -> Self {
        Self {
            version,
            description: description.into(),
            up: up.into(),
        }
    }
}

/// Schema for the `projects` and `messages` tables
pub fn portfolio_migrations() -> Vec<Migration> {
    vec![
        Migration::new(
            1,
            "Create projects table",
            r#"
            CREATE TABLE IF NOT EXISTS projects (
                id SERIAL PRIMARY KEY,
                title VARCHAR(255) NOT NULL,
                description TEXT NOT NULL,
                tech_stack TEXT[] NOT NULL DEFAULT '{}',
                link VARCHAR(255),
                created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
            )
            "#,
        ),
        Migration::new(
            2,
            "Create messages table",
            r#"
            CREATE TABLE IF NOT EXISTS messages (
                id SERIAL PRIMARY KEY,
                name VARCHAR(255) NOT NULL,
                email VARCHAR(255) NOT NULL,
                message TEXT NOT NULL,
                created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
            )
            "#,
        ),
        Migration::new(
            3,
            "Index projects by creation time",
            "CREATE INDEX IF NOT EXISTS idx_projects_created_at ON projects (created_at DESC, id DESC)",
        ),
        // Tables created before these migrations existed use a nullable
        // TIMESTAMP; the repositories read TIMESTAMPTZ.
        Migration::new(
            4,
            "Backfill missing project timestamps",
            "UPDATE projects SET created_at = NOW() WHERE created_at IS NULL",
        ),
        Migration::new(
            5,
            "Store project timestamps with time zone",
            r#"
            ALTER TABLE projects
                ALTER COLUMN created_at TYPE TIMESTAMPTZ,
                ALTER COLUMN created_at SET DEFAULT NOW(),
                ALTER COLUMN created_at SET NOT NULL
            "#,
        ),
        Migration::new(
            6,
            "Backfill missing message timestamps",
            "UPDATE messages SET created_at = NOW() WHERE created_at IS NULL",
        ),
        Migration::new(
            7,
            "Store message timestamps with time zone",
            r#"
            ALTER TABLE messages
                ALTER COLUMN created_at TYPE TIMESTAMPTZ,
                ALTER COLUMN created_at SET DEFAULT NOW(),
                ALTER COLUMN created_at SET NOT NULL
            "#,
        ),
    ]
}

/// Runs all pending migrations, returning how many were applied
pub async fn run_migrations(pool: &PgPool) -> Result<usize, DomainError> {
    let migrator = PostgresMigrator::new(pool.clone());
    let mut applied = 0;

    for migration in portfolio_migrations() {
        if migrator.run_migration(&migration).await? {
            applied += 1;
        }
    }

    let version = migrator.current_version().await?;
    info!(applied, version = ?version, "Migrations complete");

    Ok(applied)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::message::{ContactSubmission, MessageRepository};
    use crate::domain::project::ProjectRepository;
    use crate::infrastructure::message::PostgresMessageRepository;
    use crate::infrastructure::project::PostgresProjectRepository;
    use crate::infrastructure::storage::test_db::TestDatabase;

    #[test]
    fn test_migration_creation() {
        let migration = Migration::new(1, "Test migration", "CREATE TABLE test");

        assert_eq!(migration.version, 1);
        assert_eq!(migration.description, "Test migration");
        assert_eq!(migration.up, "CREATE TABLE test");
    }

    #[test]
    fn test_migrations_order() {
        let migrations = portfolio_migrations();

        assert!(!migrations.is_empty());

        for i in 1..migrations.len() {
            assert!(
                migrations[i].version > migrations[i - 1].version,
                "Migrations should be in ascending order"
            );
        }
    }

    #[test]
    fn test_migrations_are_single_statements() {
        for migration in portfolio_migrations() {
            assert!(!migration.description.is_empty());
            assert!(!migration.up.trim().is_empty());
            assert!(!migration.up.contains(';'), "{}", migration.description);
        }
    }

    #[test]
    fn test_schema_columns() {
        let migrations = portfolio_migrations();

        assert!(migrations[0].up.contains("tech_stack TEXT[]"));
        assert!(migrations[0].up.contains("link VARCHAR(255)"));
        assert!(migrations[1].up.contains("email VARCHAR(255) NOT NULL"));
    }

    #[test]
    fn test_timestamps_converted_to_timestamptz() {
        let migrations = portfolio_migrations();

        for table in ["projects", "messages"] {
            let converted = migrations.iter().any(|m| {
                m.up.contains(&format!("ALTER TABLE {}", table)) && m.up.contains("TYPE TIMESTAMPTZ")
            });
            assert!(converted, "{}", table);
        }
    }

    #[tokio::test]
    #[ignore = "Requires running PostgreSQL instance"]
    async fn test_run_migrations_is_idempotent() {
        let db = TestDatabase::empty().await;

        let first = run_migrations(&db.pool).await.unwrap();
        let second = run_migrations(&db.pool).await.unwrap();

        assert_eq!(first, portfolio_migrations().len());
        assert_eq!(second, 0);

        let version = PostgresMigrator::new(db.pool.clone())
            .current_version()
            .await
            .unwrap();
        assert_eq!(version, portfolio_migrations().last().map(|m| m.version));

        db.drop().await;
    }

    #[tokio::test]
    #[ignore = "Requires running PostgreSQL instance"]
    async fn test_upgrades_tables_with_plain_timestamps() {
        let db = TestDatabase::empty().await;

        for statement in [
            "CREATE TABLE projects (id SERIAL PRIMARY KEY, title VARCHAR(255) NOT NULL, \
             description TEXT NOT NULL, tech_stack TEXT[] NOT NULL, link VARCHAR(255), \
             created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP)",
            "CREATE TABLE messages (id SERIAL PRIMARY KEY, name VARCHAR(255) NOT NULL, \
             email VARCHAR(255) NOT NULL, message TEXT NOT NULL, \
             created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP)",
            "INSERT INTO projects (title, description, tech_stack) \
             VALUES ('Existing', 'Already here', ARRAY['React'])",
            "INSERT INTO projects (title, description, tech_stack, created_at) \
             VALUES ('Undated', 'No timestamp', ARRAY['Go'], NULL)",
        ] {
            sqlx::query(statement).execute(&db.pool).await.unwrap();
        }

        run_migrations(&db.pool).await.unwrap();

        let column_types: Vec<(String, String, String)> = sqlx::query_as(
            "SELECT table_name::text, data_type::text, is_nullable::text \
             FROM information_schema.columns \
             WHERE table_schema = current_schema() AND column_name = 'created_at' \
             ORDER BY table_name",
        )
        .fetch_all(&db.pool)
        .await
        .unwrap();
        for (table, data_type, nullable) in &column_types {
            assert_eq!(data_type, "timestamp with time zone", "{}", table);
            assert_eq!(nullable, "NO", "{}", table);
        }
        assert_eq!(column_types.len(), 2);

        let projects = PostgresProjectRepository::new(db.pool.clone());
        let listed = projects.list().await.unwrap();
        assert_eq!(listed.len(), 2);
        assert!(listed.iter().any(|p| p.title() == "Existing"));

        let messages = PostgresMessageRepository::new(db.pool.clone());
        let message = ContactSubmission::new("Ada", "ada@example.com", "Hello after upgrade")
            .validate()
            .unwrap();
        messages.create(message).await.unwrap();

        let stored: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM messages")
            .fetch_one(&db.pool)
            .await
            .unwrap();
        assert_eq!(stored, 1);

        db.drop().await;
    }
}
