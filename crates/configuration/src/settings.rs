use serde::Deserialize;

/// The root configuration structure for the entire application.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub database: DatabaseSettings,
}

/// Where the HTTP boundary listens and how long one request may run.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    /// The interface to bind, as an IP address (e.g. "0.0.0.0").
    #[serde(default = "default_host")]
    pub host: String,
    /// The port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
    /// Cap on total request handling time, in seconds. Every operation may
    /// block on the pool or a query, so the cap sits at the HTTP boundary
    /// rather than inside the services.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

/// Connection pool sizing and patience.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseSettings {
    /// Upper bound on pooled connections.
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    /// How long to wait for a free pooled connection, in seconds.
    #[serde(default = "default_acquire_timeout_secs")]
    pub acquire_timeout_secs: u64,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            max_connections: default_max_connections(),
            acquire_timeout_secs: default_acquire_timeout_secs(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    4000
}

fn default_request_timeout_secs() -> u64 {
    30
}

fn default_max_connections() -> u32 {
    10
}

fn default_acquire_timeout_secs() -> u64 {
    5
}
