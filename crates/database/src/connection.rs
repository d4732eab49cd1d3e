use crate::error::DbError;
use sqlx::{postgres::PgPoolOptions, PgPool};
use std::env;
use std::time::Duration;

/// Establishes a connection pool to the PostgreSQL database.
///
/// This function reads the `DATABASE_URL` from the environment (a `.env`
/// file is honored when present), creates a bounded connection pool, and
/// returns it. The pool is created once at process start and shared by
/// every service for the lifetime of the process.
pub async fn connect(max_connections: u32, acquire_timeout: Duration) -> Result<PgPool, DbError> {
    // Load environment variables from the .env file, if there is one.
    dotenvy::dotenv().ok();

    let database_url = env::var("DATABASE_URL")
        .map_err(|_e| DbError::ConnectionConfigError("DATABASE_URL must be set.".to_string()))?;

    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(acquire_timeout)
        .connect(&database_url)
        .await?;

    Ok(pool)
}

/// Applies the schema and seed migrations.
///
/// This is the one-shot setup step run from the CLI before serving. Each
/// migration file executes inside its own transaction and rolls back
/// entirely on failure. The request-serving path never calls this; it
/// assumes the schema already exists.
pub async fn run_migrations(pool: &PgPool) -> Result<(), DbError> {
    tracing::info!("Applying database migrations...");
    // Use a relative path from the crate root
    sqlx::migrate!("./migrations").run(pool).await?;
    Ok(())
}
