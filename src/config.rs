//! Configuration module for the portfolio backend.
//!
//! Loads configuration from YAML files and environment variables.

use std::path::PathBuf;

use config::builder::{ConfigBuilder, DefaultState};
use config::{Config as ConfigLoader, ConfigError, Environment, File};
use serde::Deserialize;

/// Root configuration structure.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub assets: AssetsConfig,
}

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Database configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
}

/// Static frontend bundle.
#[derive(Debug, Clone, Deserialize)]
pub struct AssetsConfig {
    /// Directory the bundle is served from.
    pub dir: PathBuf,
    /// Entry file inside `dir`, served for every unmatched path.
    pub index: String,
}

impl AssetsConfig {
    pub fn index_path(&self) -> PathBuf {
        self.dir.join(&self.index)
    }
}

impl Config {
    /// Load configuration from files and environment.
    ///
    /// Priority (highest to lowest):
    /// 1. PORT (overrides `server.port` only)
    /// 2. Environment variables (PORTFOLIO__*)
    /// 3. config/local.yaml (if exists)
    /// 4. config/default.yaml (if exists)
    /// 5. Built-in defaults
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_with_port(std::env::var("PORT").ok())
    }

    fn load_with_port(port: Option<String>) -> Result<Self, ConfigError> {
        let builder = Self::defaults()?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            .add_source(
                Environment::with_prefix("PORTFOLIO")
                    .separator("__")
                    .try_parsing(true),
            );

        Self::finish(builder, port)
    }

    /// Built-in defaults, used when no file or variable sets a key.
    fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        ConfigLoader::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000)?
            .set_default("database.url", "sqlite://portfolio.db?mode=rwc")?
            .set_default("assets.dir", "public")?
            .set_default("assets.index", "index.html")
    }

    fn finish(
        builder: ConfigBuilder<DefaultState>,
        port: Option<String>,
    ) -> Result<Self, ConfigError> {
        builder
            .set_override_option("server.port", port)?
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::finish(Config::defaults().unwrap(), None).unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.database.url, "sqlite://portfolio.db?mode=rwc");
        assert_eq!(config.assets.dir, PathBuf::from("public"));
        assert_eq!(config.assets.index, "index.html");
    }

    #[test]
    fn test_port_override() {
        let config =
            Config::finish(Config::defaults().unwrap(), Some("8181".to_string())).unwrap();
        assert_eq!(config.server.port, 8181);
    }

    #[test]
    fn test_invalid_port_rejected() {
        let result = Config::finish(Config::defaults().unwrap(), Some("not-a-port".to_string()));
        assert!(result.is_err());
    }

    #[test]
    fn test_index_path() {
        let assets = AssetsConfig {
            dir: PathBuf::from("public"),
            index: "index.html".to_string(),
        };
        assert_eq!(assets.index_path(), PathBuf::from("public/index.html"));
    }
}
