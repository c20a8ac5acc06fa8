//! HTTP Server Configuration
//!
//! Listen address for the HTTP server. Values come from, in priority order:
//! an explicit override, the `SERVER_ADDR` environment variable (optionally
//! populated from `./config/.env`), and the defaults below.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Environment variable holding `host:port`
pub const SERVER_ADDR_VAR: &str = "SERVER_ADDR";

/// Optional dotenv file loaded before reading the environment
pub const DEFAULT_ENV_FILE: &str = "./config/.env";

/// Configuration errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Invalid server address '{0}': expected host:port")]
    InvalidAddr(String),

    #[error("Failed to load env file {path}: {reason}")]
    EnvFile { path: String, reason: String },
}

/// HTTP server configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpServerConfig {
    /// Host to bind to (default: "0.0.0.0")
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind to (default: 8080)
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl HttpServerConfig {
    /// Create a new config with specified port
    pub fn with_port(port: u16) -> Self {
        Self {
            port,
            ..Default::default()
        }
    }

    /// Parse a `host:port` address
    pub fn from_addr(addr: &str) -> Result<Self, ConfigError> {
        let invalid = || ConfigError::InvalidAddr(addr.to_string());

        let (host, port) = addr.trim().rsplit_once(':').ok_or_else(invalid)?;
        let port = port.parse::<u16>().map_err(|_| invalid())?;

        Ok(Self {
            host: if host.is_empty() {
                default_host()
            } else {
                host.to_string()
            },
            port,
        })
    }

    /// Load `env_file` into the environment, then resolve the address.
    ///
    /// The file is loaded even when an override is given, so `RUST_LOG` and
    /// other variables it sets are visible to later setup.
    pub fn load(addr_override: Option<&str>, env_file: &Path) -> Result<Self, ConfigError> {
        load_env_file(env_file)?;
        Self::resolve(addr_override)
    }

    /// Resolve from an override, then `SERVER_ADDR`, then defaults
    pub fn resolve(addr_override: Option<&str>) -> Result<Self, ConfigError> {
        if let Some(addr) = addr_override {
            return Self::from_addr(addr);
        }

        match std::env::var(SERVER_ADDR_VAR) {
            Ok(addr) if !addr.trim().is_empty() => Self::from_addr(&addr),
            _ => Ok(Self::default()),
        }
    }

    /// Get the socket address string
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Load `path` into the process environment if it exists.
///
/// Variables already set in the environment are left untouched.
pub fn load_env_file(path: &Path) -> Result<(), ConfigError> {
    if !path.exists() {
        return Ok(());
    }

    dotenvy::from_path(path).map_err(|e| ConfigError::EnvFile {
        path: path.display().to_string(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = HttpServerConfig::default();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn test_socket_addr() {
        let config = HttpServerConfig::with_port(9090);
        assert_eq!(config.socket_addr(), "0.0.0.0:9090");
    }

    #[test]
    fn test_from_addr() {
        let config = HttpServerConfig::from_addr("127.0.0.1:3000").unwrap();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 3000);

        let config = HttpServerConfig::from_addr(":4000").unwrap();
        assert_eq!(config.socket_addr(), "0.0.0.0:4000");
    }

    #[test]
    fn test_from_addr_rejects_garbage() {
        assert_eq!(
            HttpServerConfig::from_addr("localhost"),
            Err(ConfigError::InvalidAddr("localhost".into()))
        );
        assert!(HttpServerConfig::from_addr("localhost:http").is_err());
        assert!(HttpServerConfig::from_addr("localhost:70000").is_err());
    }

    #[test]
    fn test_override_wins() {
        let config = HttpServerConfig::resolve(Some("10.0.0.1:81")).unwrap();
        assert_eq!(config.socket_addr(), "10.0.0.1:81");
    }

    #[test]
    fn test_env_file_loaded_despite_override() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".env");
        std::fs::write(&path, "SPD_CONFIG_TEST_MARKER=from-env-file\n").unwrap();

        let config = HttpServerConfig::load(Some("1.2.3.4:80"), &path).unwrap();

        assert_eq!(config.socket_addr(), "1.2.3.4:80");
        assert_eq!(
            std::env::var("SPD_CONFIG_TEST_MARKER").as_deref(),
            Ok("from-env-file")
        );
    }

    #[test]
    fn test_missing_env_file_is_fine() {
        assert!(load_env_file(Path::new("./does/not/exist.env")).is_ok());
    }

    #[test]
    fn test_config_deserialize_defaults() {
        let config: HttpServerConfig = serde_json::from_str(r#"{"port": 1234}"#).unwrap();
        assert_eq!(config.socket_addr(), "0.0.0.0:1234");
    }
}
