//! OpenSearch implementation of the search connector.
//!
//! This module provides a concrete implementation of `SearchConnector`
//! using the OpenSearch client, which speaks the Elasticsearch-compatible
//! REST API.

mod connector;
mod options;
mod pool;

pub use connector::OpenSearchConnector;
pub use options::ConnectorOptions;
pub use pool::RoundRobinConnectionPool;
