// Declare the modules that make up this crate.
pub mod error;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use error::ConfigError;
pub use settings::{DatabaseSettings, ServerSettings, Settings};

/// Loads the application configuration.
///
/// This function is the primary entry point for this crate. It reads the
/// optional `config.toml` file, layers `PROPERTYZM_`-prefixed environment
/// variables on top (e.g. `PROPERTYZM_SERVER__PORT=8080`), and deserializes
/// the result into our strongly-typed `Settings` struct. Anything left
/// unset falls back to the built-in defaults, so a bare checkout runs
/// without any configuration file at all.
pub fn load_settings() -> Result<Settings, ConfigError> {
    let builder = config::Config::builder()
        // Tells the builder to look for a file named `config.toml`
        .add_source(config::File::with_name("config.toml").required(false))
        // Environment overrides use `__` to separate nesting levels.
        .add_source(config::Environment::with_prefix("PROPERTYZM").separator("__"))
        .build()?;

    // Attempt to deserialize the entire configuration into our `Settings` struct
    let settings = builder.try_deserialize::<Settings>()?;

    Ok(settings)
}
