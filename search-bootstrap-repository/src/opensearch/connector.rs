//! OpenSearch connector implementation.
//!
//! This module provides the concrete implementation of `SearchConnector`
//! using the OpenSearch Rust client.

use async_trait::async_trait;
use opensearch::{
    auth::Credentials,
    http::transport::{ConnectionPool, SingleNodeConnectionPool, TransportBuilder},
    OpenSearch,
};
use std::fmt::Debug;
use tracing::{debug, instrument};
use url::Url;

use crate::config::HostEntry;
use crate::errors::ConnectionError;
use crate::interfaces::SearchConnector;
use crate::opensearch::options::ConnectorOptions;
use crate::opensearch::pool::RoundRobinConnectionPool;

/// Connector that builds `OpenSearch` clients.
///
/// A single host uses a single-node pool; several hosts are balanced
/// round-robin by `RoundRobinConnectionPool`.
///
/// # Example
///
/// ```ignore
/// let connector = OpenSearchConnector::new();
/// let client = connector.connect(&[HostEntry::from("localhost:9200")])?;
/// connector.ping(&client).await?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct OpenSearchConnector {
    options: ConnectorOptions,
}

impl OpenSearchConnector {
    /// Create a connector with default transport options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a connector with custom transport options.
    pub fn with_options(options: ConnectorOptions) -> Self {
        Self { options }
    }

    fn transport_builder<P>(&self, pool: P) -> TransportBuilder
    where
        P: ConnectionPool + Debug + Clone + Send + 'static,
    {
        let mut builder = TransportBuilder::new(pool).disable_proxy();

        if let Some(timeout) = self.options.timeout() {
            builder = builder.timeout(timeout);
        }

        if let Some((username, password)) = self.options.basic_auth() {
            builder = builder.auth(Credentials::Basic(username, password));
        }

        builder
    }
}

#[async_trait]
impl SearchConnector for OpenSearchConnector {
    type Client = OpenSearch;

    #[instrument(skip(self, hosts), fields(host_count = hosts.len()))]
    fn connect(&self, hosts: &[HostEntry]) -> Result<OpenSearch, ConnectionError> {
        let mut urls = hosts
            .iter()
            .map(HostEntry::node_url)
            .collect::<Result<Vec<Url>, _>>()?;

        let builder = match urls.len() {
            0 => return Err(ConnectionError::invalid_host("no hosts given")),
            1 => self.transport_builder(SingleNodeConnectionPool::new(urls.remove(0))),
            _ => self.transport_builder(RoundRobinConnectionPool::new(urls)?),
        };

        let transport = builder
            .build()
            .map_err(|e| ConnectionError::transport(e.to_string()))?;

        debug!("Built OpenSearch transport");

        Ok(OpenSearch::new(transport))
    }

    #[instrument(skip(self, client))]
    async fn ping(&self, client: &OpenSearch) -> Result<(), ConnectionError> {
        let response = client
            .ping()
            .send()
            .await
            .map_err(|e| ConnectionError::unreachable(e.to_string()))?;

        let status = response.status_code();
        debug!(status = %status, "Ping response");

        if !status.is_success() {
            return Err(ConnectionError::unavailable(format!(
                "ping returned status {}",
                status
            )));
        }

        Ok(())
    }
}
