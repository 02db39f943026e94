//! Migrate command - applies the schema and optionally seeds sample data

use clap::Args;
use tracing::info;

use crate::config::AppConfig;
use crate::infrastructure::logging;
use crate::infrastructure::storage::{run_migrations, seed_projects, RepositoryFactory, StorageType};

#[derive(Debug, Args)]
pub struct MigrateArgs {
    /// Insert the sample projects when the table is empty
    #[arg(long)]
    pub seed: bool,
}

pub async fn run(args: MigrateArgs) -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load()?;
    logging::init_logging(&config.logging);

    if crate::storage_type(&config.database)? != StorageType::Postgres {
        anyhow::bail!("Migrations require the postgres storage backend");
    }

    let pool = crate::connect_database(&config.database).await?;

    run_migrations(&pool).await?;

    if args.seed {
        let repositories = RepositoryFactory::postgres(pool.clone());
        let inserted = seed_projects(repositories.projects.as_ref()).await?;
        info!(inserted, "Seeding complete");
    }

    pool.close().await;

    Ok(())
}
