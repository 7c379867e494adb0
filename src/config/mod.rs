//! Configuration Management Module
//!
//! This module handles loading and managing configuration for the discount API.
//! The listening port always comes from the `PORT` environment variable; an
//! optional TOML file can override the bind host and the auth header name.

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::net::IpAddr;
use warp::http::header::HeaderName;

/// Environment variable holding the TCP port to listen on (required).
pub const PORT_ENV: &str = "PORT";

/// Environment variable pointing at an optional TOML configuration file.
pub const CONFIG_PATH_ENV: &str = "DISCOUNT_API_CONFIG_PATH";

/// Header that must carry a non-empty token on every request.
pub const DEFAULT_AUTH_HEADER: &str = "Lognex-Discount-API-Auth-Token";

/// Bind address used when no configuration file sets one.
pub const DEFAULT_HOST: &str = "0.0.0.0";

// ============================================================================
// CONFIGURATION STRUCTURES
// ============================================================================

/// Main configuration structure containing all service settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// API server configuration (host, port, auth header)
    #[serde(default)]
    pub api: ApiConfig,
}

/// API server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Host address to bind the API server to
    #[serde(default = "default_host")]
    pub host: String,
    /// Port number to bind the API server to; only ever set from `PORT`
    #[serde(skip_deserializing)]
    pub port: u16,
    /// Name of the header carrying the auth token
    #[serde(default = "default_auth_header")]
    pub auth_header: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: 0,
            auth_header: default_auth_header(),
        }
    }
}

fn default_host() -> String {
    DEFAULT_HOST.to_string()
}

fn default_auth_header() -> String {
    DEFAULT_AUTH_HEADER.to_string()
}

// ============================================================================
// CONFIGURATION LOADING AND MANAGEMENT
// ============================================================================

impl Config {
    /// Loads configuration from the process environment.
    ///
    /// # Returns
    ///
    /// - `Ok(Config)` - Configuration with the port taken from `PORT`
    /// - `Err(anyhow::Error)` - `PORT` missing or invalid, config file unreadable, or validation failed
    pub fn load() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration using `lookup` to resolve environment variables.
    ///
    /// This function:
    /// 1. Reads the TOML file named by `DISCOUNT_API_CONFIG_PATH`, if set
    /// 2. Falls back to defaults otherwise
    /// 3. Takes the port from `PORT`, which must be set
    /// 4. Validates the result
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match lookup(CONFIG_PATH_ENV) {
            Some(path) => Self::from_file(&path)?,
            None => Self::default(),
        };

        let port = lookup(PORT_ENV)
            .filter(|value| !value.is_empty())
            .ok_or_else(|| anyhow::anyhow!("$PORT must be set"))?;
        config.api.port = port
            .trim()
            .parse()
            .with_context(|| format!("Invalid $PORT value '{}'", port))?;

        config.validate()?;
        Ok(config)
    }

    /// Parses a TOML configuration file.
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        if !std::path::Path::new(path).exists() {
            return Err(anyhow::anyhow!(
                "Configuration file '{}' not found. Please copy the template:\n\
                cp config/discount_api.template.toml {}",
                path,
                path
            ));
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read configuration file '{}'", path))?;
        toml::from_str(&content).with_context(|| format!("Failed to parse configuration file '{}'", path))
    }

    /// Validates the bind host and the auth header name.
    pub fn validate(&self) -> anyhow::Result<()> {
        self.api
            .host
            .parse::<IpAddr>()
            .map_err(|_| anyhow::anyhow!("Configuration error: invalid API host '{}'", self.api.host))?;

        if self.api.auth_header.trim().is_empty() {
            anyhow::bail!("Configuration error: auth header name must not be empty");
        }
        HeaderName::from_bytes(self.api.auth_header.as_bytes()).map_err(|_| {
            anyhow::anyhow!(
                "Configuration error: '{}' is not a valid HTTP header name",
                self.api.auth_header
            )
        })?;

        Ok(())
    }
}
