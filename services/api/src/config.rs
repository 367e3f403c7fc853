//! Service settings
//!
//! Defaults, then an optional `config/api.toml`, then `API_*` environment
//! variables. Database settings live in `common::database::DatabaseConfig`.

use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::Deserialize;

/// Storage backend behind the repositories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    Postgres,
    Memory,
}

/// API service settings
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub host: String,
    pub port: u16,
    pub storage: StorageBackend,
    /// `tracing_subscriber::EnvFilter` directive, overridden by `RUST_LOG`
    pub log_filter: String,
}

impl Settings {
    /// Load settings from the default file location and the environment
    pub fn load() -> Result<Self> {
        Self::load_from("config/api")
    }

    /// Load settings, reading the optional file at `path` (extension inferred)
    pub fn load_from(path: &str) -> Result<Self> {
        let settings = Config::builder()
            .set_default("host", "0.0.0.0")?
            .set_default("port", 3001)?
            .set_default("storage", "postgres")?
            .set_default("log_filter", "info")?
            .add_source(File::with_name(path).required(false))
            .add_source(Environment::with_prefix("API").try_parsing(true))
            .build()
            .context("Failed to build settings")?;

        settings
            .try_deserialize()
            .context("Failed to deserialize settings")
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
