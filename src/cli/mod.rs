//! CLI module for the portfolio API
//!
//! - `serve`: run the HTTP server (default)
//! - `migrate`: apply the database schema and exit

pub mod migrate;
pub mod serve;

use clap::{Parser, Subcommand};

/// Portfolio API - projects and contact form backend
#[derive(Parser)]
#[command(name = "portfolio-api")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the API server (default)
    Serve,

    /// Apply database migrations and exit
    Migrate(migrate::MigrateArgs),
}
