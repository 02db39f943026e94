//! Throwaway PostgreSQL schemas for database tests
//!
//! Run with: DATABASE_URL=postgres://... cargo test -- --ignored

use std::str::FromStr;

use sqlx::postgres::{PgConnectOptions, PgPool, PgPoolOptions};

use super::run_migrations;

/// A pool whose `search_path` is a fresh schema, dropped by [`TestDatabase::drop`]
pub struct TestDatabase {
    pub pool: PgPool,
    schema: String,
    url: String,
}

impl TestDatabase {
    /// Empty schema, no tables
    pub async fn empty() -> Self {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
        let schema = format!("portfolio_test_{}", uuid::Uuid::new_v4().simple());

        let admin = PgPool::connect(&url).await.unwrap();
        sqlx::query(&format!("CREATE SCHEMA {}", schema))
            .execute(&admin)
            .await
            .unwrap();
        admin.close().await;

        let options = PgConnectOptions::from_str(&url)
            .unwrap()
            .options([("search_path", schema.as_str())]);
        let pool = PgPoolOptions::new()
            .max_connections(2)
            .connect_with(options)
            .await
            .unwrap();

        Self { pool, schema, url }
    }

    /// Schema with every migration applied
    pub async fn migrated() -> Self {
        let db = Self::empty().await;
        run_migrations(&db.pool).await.unwrap();
        db
    }

    pub async fn drop(self) {
        self.pool.close().await;

        let admin = PgPool::connect(&self.url).await.unwrap();
        sqlx::query(&format!("DROP SCHEMA {} CASCADE", self.schema))
            .execute(&admin)
            .await
            .unwrap();
        admin.close().await;
    }
}
