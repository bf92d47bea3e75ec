//! Settings for the bootstrap binary.
//!
//! Settings come either from a JSON document shaped like the application
//! configuration, or from environment variables (optionally via `.env`).

use serde::Deserialize;
use std::path::Path;
use std::{env, fs, io};
use thiserror::Error;
use tracing::debug;

use search_bootstrap_repository::{AppConfig, ConnectorOptions, ElasticsearchConfig, HostEntry};

/// Comma-separated list of hosts.
pub const ENV_HOSTS: &str = "ELASTICSEARCH_HOSTS";
/// Single host.
pub const ENV_HOST: &str = "ELASTICSEARCH_HOST";
/// Request timeout in seconds.
pub const ENV_TIMEOUT_SECS: &str = "ELASTICSEARCH_TIMEOUT_SECS";
/// Basic auth username.
pub const ENV_USERNAME: &str = "ELASTICSEARCH_USERNAME";
/// Basic auth password.
pub const ENV_PASSWORD: &str = "ELASTICSEARCH_PASSWORD";

/// Errors that can occur while loading settings.
#[derive(Error, Debug)]
pub enum SettingsError {
    /// The settings file could not be read.
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    /// The settings document is not valid JSON for this shape.
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// An environment variable held a value that could not be used.
    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: String, value: String },
}

/// Configuration plus transport options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Settings {
    #[serde(flatten)]
    pub app: AppConfig,
    #[serde(default)]
    pub connector: ConnectorOptions,
}

impl Settings {
    /// Parse settings from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read settings from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.display().to_string(),
            source,
        })?;

        debug!(path = %path.display(), "Loaded settings file");

        Self::from_json_str(&json)
    }

    /// Read settings from the environment, loading `.env` first if present.
    ///
    /// # Environment Variables
    ///
    /// - `ELASTICSEARCH_HOSTS`: comma-separated hosts
    /// - `ELASTICSEARCH_HOST`: a single host
    /// - `ELASTICSEARCH_TIMEOUT_SECS`: request timeout
    /// - `ELASTICSEARCH_USERNAME` / `ELASTICSEARCH_PASSWORD`: basic auth
    pub fn from_env() -> Result<Self, SettingsError> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build settings from a variable lookup.
    ///
    /// The `elasticsearch` section is only present when a host variable is set.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, SettingsError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let hosts = lookup(ENV_HOSTS)
            .map(|value| {
                value
                    .split(',')
                    .map(str::trim)
                    .filter(|host| !host.is_empty())
                    .map(HostEntry::from)
                    .collect::<Vec<_>>()
            })
            .filter(|hosts| !hosts.is_empty());

        let host = lookup(ENV_HOST)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .map(HostEntry::from);

        let elasticsearch = if hosts.is_none() && host.is_none() {
            None
        } else {
            Some(ElasticsearchConfig { host, hosts })
        };

        let timeout_secs = lookup(ENV_TIMEOUT_SECS)
            .map(|value| {
                value
                    .trim()
                    .parse::<u64>()
                    .map_err(|_| SettingsError::InvalidValue {
                        key: ENV_TIMEOUT_SECS.to_string(),
                        value,
                    })
            })
            .transpose()?;

        Ok(Self {
            app: AppConfig { elasticsearch },
            connector: ConnectorOptions {
                timeout_secs,
                username: lookup(ENV_USERNAME),
                password: lookup(ENV_PASSWORD),
            },
        })
    }
}
