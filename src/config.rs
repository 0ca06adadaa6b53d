//! Server Configuration
//!
//! ## Priority Order (highest to lowest)
//!
//! 1. CLI flags (`--host`, `--port`, `--allowed-origin`)
//! 2. Config file (`--config path/to/dagcheck.toml`)
//! 3. Defaults (`127.0.0.1:8000`, origin `http://localhost:3000`)

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{DagCheckError, Result};

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8000;
/// Editor dev server
pub const DEFAULT_ALLOWED_ORIGIN: &str = "http://localhost:3000";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    /// Interface to bind
    pub host: String,

    /// TCP port to listen on
    pub port: u16,

    /// The single browser origin allowed by CORS
    pub allowed_origin: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            allowed_origin: DEFAULT_ALLOWED_ORIGIN.to_string(),
        }
    }
}

/// Values given on the command line; `None` keeps the file/default value
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub allowed_origin: Option<String>,
}

impl ServerConfig {
    /// Load configuration from a TOML file.
    ///
    /// Unlike the implicit defaults, an explicitly named file must exist.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| DagCheckError::ConfigError {
            reason: format!("Failed to read config file '{}': {}", path.display(), e),
        })?;

        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| DagCheckError::ConfigError {
            reason: format!("Failed to parse config file: {}", e),
        })
    }

    /// Resolve file (if any), then apply CLI overrides
    pub fn resolve(path: Option<&Path>, overrides: ConfigOverrides) -> Result<Self> {
        let base = match path {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        Ok(base.with_overrides(overrides))
    }

    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> Self {
        if let Some(host) = overrides.host {
            self.host = host;
        }
        if let Some(port) = overrides.port {
            self.port = port;
        }
        if let Some(origin) = overrides.allowed_origin {
            self.allowed_origin = origin;
        }
        self
    }

    /// `host:port`, resolved by the listener (hostnames allowed)
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
