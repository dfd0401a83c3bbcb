//! Server entrypoint

use anyhow::Context;
use clap::Parser;
use employee_search::api::rest;
use employee_search::config::AppConfig;
use employee_search::domain::EmployeeService;
use employee_search::infra::storage::{Migrator, SeaOrmEmployeeRepository};
use sea_orm::Database;
use sea_orm_migration::MigratorTrait;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "employee-search", about = "Employee search HTTP service")]
struct Cli {
    /// Path to a YAML configuration file
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = AppConfig::load(cli.config.as_deref())?;

    let db = Database::connect(&config.database.url)
        .await
        .with_context(|| format!("failed to connect to {}", config.database.url))?;

    if config.database.run_migrations {
        Migrator::up(&db, None)
            .await
            .context("failed to run migrations")?;
    }

    let repo = Arc::new(SeaOrmEmployeeRepository::new(Arc::new(db)));
    let service = Arc::new(EmployeeService::new(repo));
    let app = rest::router(service);

    let listener = TcpListener::bind(&config.server.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.server.bind_addr))?;
    tracing::info!(addr = %config.server.bind_addr, "employee search service listening");

    axum::serve(listener, app).await?;

    Ok(())
}
