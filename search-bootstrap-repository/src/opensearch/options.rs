//! Transport options for the OpenSearch connector.

use serde::Deserialize;
use std::time::Duration;

/// Options applied to every transport built by the connector.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ConnectorOptions {
    /// Request timeout in seconds. Left to the client default when unset.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
    /// Basic auth username.
    #[serde(default)]
    pub username: Option<String>,
    /// Basic auth password. Ignored without a username.
    #[serde(default)]
    pub password: Option<String>,
}

impl ConnectorOptions {
    /// Set the request timeout.
    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = Some(timeout_secs);
        self
    }

    /// Set basic auth credentials.
    pub fn with_basic_auth(
        mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.username = Some(username.into());
        self.password = Some(password.into());
        self
    }

    /// Request timeout, when configured.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    /// Username and password, when a username is configured.
    pub fn basic_auth(&self) -> Option<(String, String)> {
        self.username
            .as_ref()
            .map(|username| (username.clone(), self.password.clone().unwrap_or_default()))
    }
}
