//! Configuration types for the search connection.
//!
//! The shapes mirror the `elasticsearch` section of the application
//! configuration: a single `host`, or an ordered list of `hosts` whose
//! entries are either plain address strings or structured descriptors.

use serde::{Deserialize, Serialize};
use std::fmt;
use url::Url;

use crate::errors::{ConfigError, ConnectionError};

/// Protocol used when a descriptor omits one.
pub const DEFAULT_PROTOCOL: &str = "http";

/// Port used when a descriptor omits one.
pub const DEFAULT_PORT: u16 = 9200;

/// Application configuration as seen by the bootstrapper.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// The `elasticsearch` section, if configured.
    #[serde(default)]
    pub elasticsearch: Option<ElasticsearchConfig>,
}

impl AppConfig {
    /// Create a config with the given `elasticsearch` section.
    pub fn with_elasticsearch(elasticsearch: ElasticsearchConfig) -> Self {
        Self {
            elasticsearch: Some(elasticsearch),
        }
    }

    /// Return the `elasticsearch` section or `ConfigError::MissingSection`.
    pub fn elasticsearch(&self) -> Result<&ElasticsearchConfig, ConfigError> {
        self.elasticsearch.as_ref().ok_or(ConfigError::MissingSection)
    }
}

/// The `elasticsearch` configuration section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElasticsearchConfig {
    /// A single host.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<HostEntry>,
    /// An ordered list of hosts. Takes precedence over `host`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hosts: Option<Vec<HostEntry>>,
}

impl ElasticsearchConfig {
    /// Create a section with a single host.
    pub fn single(host: impl Into<HostEntry>) -> Self {
        Self {
            host: Some(host.into()),
            hosts: None,
        }
    }

    /// Create a section with a list of hosts.
    pub fn multiple<I, H>(hosts: I) -> Self
    where
        I: IntoIterator<Item = H>,
        H: Into<HostEntry>,
    {
        Self {
            host: None,
            hosts: Some(hosts.into_iter().map(Into::into).collect()),
        }
    }

    /// Resolve the configured hosts, in order.
    ///
    /// Blank entries are skipped. A `hosts` list with any entry left wins
    /// over `host`; with none left, `host` is used if it is not blank.
    pub fn hosts(&self) -> Result<Vec<HostEntry>, ConfigError> {
        let hosts: Vec<HostEntry> = self
            .hosts
            .iter()
            .flatten()
            .filter(|host| !host.is_blank())
            .cloned()
            .collect();

        if !hosts.is_empty() {
            return Ok(hosts);
        }

        match &self.host {
            Some(host) if !host.is_blank() => Ok(vec![host.clone()]),
            _ => Err(ConfigError::MissingHosts),
        }
    }

    /// Human-readable rendering of the configured hosts.
    pub fn display_string(&self) -> Result<String, ConfigError> {
        self.hosts().map(|hosts| display_hosts(&hosts))
    }
}

/// Join host entries into the order-preserving display string.
pub fn display_hosts(hosts: &[HostEntry]) -> String {
    hosts
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// One configured host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum HostEntry {
    /// A plain address such as `localhost:9200` or `https://es.internal:9243`.
    Address(String),
    /// A structured descriptor.
    Descriptor(HostDescriptor),
}

impl HostEntry {
    fn is_blank(&self) -> bool {
        match self {
            Self::Address(address) => address.trim().is_empty(),
            Self::Descriptor(descriptor) => descriptor.host.trim().is_empty(),
        }
    }

    /// Build the node URL the client connects to.
    ///
    /// Addresses without a scheme are assumed to be plain HTTP.
    pub fn node_url(&self) -> Result<Url, ConnectionError> {
        let raw = match self {
            Self::Address(address) if address.contains("://") => address.clone(),
            Self::Address(address) => format!("{}://{}", DEFAULT_PROTOCOL, address),
            Self::Descriptor(descriptor) => descriptor.to_url_string(),
        };

        Url::parse(&raw).map_err(|e| ConnectionError::invalid_host(format!("{}: {}", raw, e)))
    }
}

impl fmt::Display for HostEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Address(address) => f.write_str(address),
            Self::Descriptor(descriptor) => write!(f, "{}", descriptor),
        }
    }
}

impl From<&str> for HostEntry {
    fn from(address: &str) -> Self {
        Self::Address(address.to_string())
    }
}

impl From<String> for HostEntry {
    fn from(address: String) -> Self {
        Self::Address(address)
    }
}

impl From<HostDescriptor> for HostEntry {
    fn from(descriptor: HostDescriptor) -> Self {
        Self::Descriptor(descriptor)
    }
}

/// Structured host form. The protocol is used to connect but never shown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostDescriptor {
    #[serde(default = "default_protocol")]
    pub protocol: String,
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl HostDescriptor {
    pub fn new(protocol: impl Into<String>, host: impl Into<String>, port: u16) -> Self {
        Self {
            protocol: protocol.into(),
            host: host.into(),
            port,
        }
    }

    fn to_url_string(&self) -> String {
        // IPv6 literals need brackets once a port is appended.
        if self.host.contains(':') && !self.host.starts_with('[') {
            format!("{}://[{}]:{}", self.protocol, self.host, self.port)
        } else {
            format!("{}://{}:{}", self.protocol, self.host, self.port)
        }
    }
}

impl fmt::Display for HostDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}

fn default_protocol() -> String {
    DEFAULT_PROTOCOL.to_string()
}

fn default_port() -> u16 {
    DEFAULT_PORT
}
