use std::net::SocketAddr;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

// This main function is the entry point when running `cargo run -p web-server`.
// It wires settings, the pool and the server together; the full application
// binary does the same through its CLI.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let settings = configuration::load_settings()?;

    let pool = database::connect(
        settings.database.max_connections,
        Duration::from_secs(settings.database.acquire_timeout_secs),
    )
    .await?;

    let addr = SocketAddr::new(settings.server.host.parse()?, settings.server.port);
    let request_timeout = Duration::from_secs(settings.server.request_timeout_secs);

    web_server::run_server(addr, pool, request_timeout).await
}
