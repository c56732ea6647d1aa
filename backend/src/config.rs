//! Server settings.
//!
//! Everything has a hardcoded default so the server starts with no
//! environment at all. Values may also come from a `.env` file, which the
//! binaries load with `dotenvy` before reading the environment.
//!
//! Environment variables:
//!   HOST                - interface to bind (default `0.0.0.0`)
//!   PORT                - TCP port (default `8000`)
//!   CLIENT_TIMEOUT_SECS - request head timeout (default 30)
//!   DATABASE_URL        - PostgreSQL connection string (`init_db` only)

use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::DEFAULT_TIMEOUT_SECS;
use crate::error::ConfigError;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub client_timeout: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            client_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup, falling back to defaults for
    /// keys that are absent or blank.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let host = non_empty(lookup("HOST")).unwrap_or(defaults.host);
        let port = match non_empty(lookup("PORT")) {
            Some(raw) => parse_value("PORT", raw)?,
            None => defaults.port,
        };
        let client_timeout = match non_empty(lookup("CLIENT_TIMEOUT_SECS")) {
            Some(raw) => Duration::from_secs(parse_value("CLIENT_TIMEOUT_SECS", raw)?),
            None => defaults.client_timeout,
        };

        Ok(Self {
            host,
            port,
            client_timeout,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

pub fn database_url() -> Result<String, ConfigError> {
    non_empty(env::var("DATABASE_URL").ok()).ok_or(ConfigError::Missing {
        key: "DATABASE_URL",
    })
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_value<T: FromStr>(key: &'static str, raw: String) -> Result<T, ConfigError> {
    raw.parse()
        .map_err(|_| ConfigError::Invalid { key, value: raw })
}
