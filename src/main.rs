use clap::{Parser, Subcommand};
use database::connection::{connect, run_migrations};
use database::PgPool;
use std::net::SocketAddr;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

/// The main entry point for the PropertyZM marketplace backend.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file, if there is one.
    dotenvy::dotenv().ok();

    // Initialize logging; RUST_LOG overrides the default level.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Parse command-line arguments
    let cli = Cli::parse();

    // Execute the appropriate command
    match cli.command {
        Commands::Serve => handle_serve().await,
        Commands::Migrate => handle_migrate().await,
    }
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// Backend for the PropertyZM listings marketplace: property catalog,
/// account profile and billing history behind a small JSON API.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP API server.
    Serve,
    /// Apply the database schema and seed data, then exit.
    ///
    /// This is the one-shot setup step; `serve` assumes it has already run.
    Migrate,
}

// ==============================================================================
// Command Logic
// ==============================================================================

async fn connect_pool() -> anyhow::Result<(configuration::Settings, PgPool)> {
    let settings = configuration::load_settings()?;

    let pool = connect(
        settings.database.max_connections,
        Duration::from_secs(settings.database.acquire_timeout_secs),
    )
    .await?;

    Ok((settings, pool))
}

/// Serves the API until the process is stopped.
async fn handle_serve() -> anyhow::Result<()> {
    let (settings, pool) = connect_pool().await?;

    let addr = SocketAddr::new(settings.server.host.parse()?, settings.server.port);
    let request_timeout = Duration::from_secs(settings.server.request_timeout_secs);

    web_server::run_server(addr, pool, request_timeout).await
}

/// Applies the migration set and reports the outcome.
async fn handle_migrate() -> anyhow::Result<()> {
    let (_settings, pool) = connect_pool().await?;

    run_migrations(&pool).await?;
    tracing::info!("Database schema and seed data are in place.");

    Ok(())
}
