//! Search connector trait definition.
//!
//! This module defines the abstract interface over the client library,
//! allowing the bootstrapper to be driven by different backends (OpenSearch,
//! mocks in tests, etc.).

use async_trait::async_trait;

use crate::config::HostEntry;
use crate::errors::ConnectionError;

/// Abstract interface for constructing a search client and checking it is ready.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` so a connector can be shared across
/// async tasks.
#[async_trait]
pub trait SearchConnector: Send + Sync {
    /// The client handle produced by this connector.
    type Client: Send + Sync + 'static;

    /// Construct a client for the given hosts.
    ///
    /// The hosts are passed as configured, in order. Construction does not
    /// contact the cluster.
    ///
    /// # Returns
    ///
    /// * `Ok(Client)` - A client ready to be pinged
    /// * `Err(ConnectionError)` - If a host is invalid or the transport cannot be built
    fn connect(&self, hosts: &[HostEntry]) -> Result<Self::Client, ConnectionError>;

    /// Wait until the client signals readiness.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - If the cluster answered the readiness request
    /// * `Err(ConnectionError)` - If the request failed or was rejected
    async fn ping(&self, client: &Self::Client) -> Result<(), ConnectionError>;
}
