//! Server configuration
//!
//! Defaults overlaid by `APP_*` environment variables, e.g. `APP_DB_PATH`.

use config::{Config, Environment};
use roster_core::{Result, RosterError};
use serde::Deserialize;
use std::net::SocketAddr;

const ENV_PREFIX: &str = "APP";

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8000";
const DEFAULT_DB_PATH: &str = "app.db";
const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub bind_address: String,
    pub db_path: String,
    pub log_level: String,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self> {
        Self::load(Environment::with_prefix(ENV_PREFIX))
    }

    fn load(env: Environment) -> Result<Self> {
        Config::builder()
            .set_default("bind_address", DEFAULT_BIND_ADDRESS)
            .and_then(|b| b.set_default("db_path", DEFAULT_DB_PATH))
            .and_then(|b| b.set_default("log_level", DEFAULT_LOG_LEVEL))
            .map_err(config_error)?
            .add_source(env)
            .build()
            .and_then(|c| c.try_deserialize::<ServerConfig>())
            .map_err(config_error)
    }

    pub fn socket_addr(&self) -> Result<SocketAddr> {
        self.bind_address.parse().map_err(|e| {
            RosterError::Config(format!(
                "invalid bind address {:?}: {}",
                self.bind_address, e
            ))
        })
    }
}

fn config_error(e: config::ConfigError) -> RosterError {
    RosterError::Config(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn load_with(vars: &[(&str, &str)]) -> Result<ServerConfig> {
        let mut source = config::Map::new();
        for (key, value) in vars {
            source.insert(key.to_string(), value.to_string());
        }
        ServerConfig::load(Environment::with_prefix(ENV_PREFIX).source(Some(source)))
    }

    #[test]
    fn test_defaults() {
        let config = load_with(&[]).unwrap();
        assert_eq!(config.bind_address, "0.0.0.0:8000");
        assert_eq!(config.db_path, "app.db");
        assert_eq!(config.log_level, "info");
        assert_eq!(config.socket_addr().unwrap().port(), 8000);
    }

    #[test]
    fn test_environment_overrides() {
        let config = load_with(&[
            ("APP_DB_PATH", "/tmp/roster/test.db"),
            ("APP_BIND_ADDRESS", "127.0.0.1:9090"),
            ("APP_LOG_LEVEL", "debug"),
        ])
        .unwrap();

        assert_eq!(config.db_path, "/tmp/roster/test.db");
        assert_eq!(config.bind_address, "127.0.0.1:9090");
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_unrelated_variables_ignored() {
        let config = load_with(&[("OTHER_DB_PATH", "/nope.db")]).unwrap();
        assert_eq!(config.db_path, "app.db");
    }

    #[test]
    fn test_invalid_bind_address() {
        let config = load_with(&[("APP_BIND_ADDRESS", "not-an-address")]).unwrap();
        assert!(matches!(config.socket_addr(), Err(RosterError::Config(_))));
    }
}
