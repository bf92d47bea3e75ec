//! # Search Bootstrap Repository
//!
//! This crate provides the configuration model, the connector and logger
//! interfaces, and a concrete OpenSearch-backed connector used to open the
//! application's connection to an Elasticsearch-compatible cluster.

pub mod config;
pub mod errors;
pub mod interfaces;
pub mod opensearch;

pub use config::{AppConfig, ElasticsearchConfig, HostDescriptor, HostEntry};
pub use errors::{ConfigError, ConnectionError};
pub use interfaces::{LoggerFactory, ModuleLogger, SearchConnector};
pub use self::opensearch::{ConnectorOptions, OpenSearchConnector, RoundRobinConnectionPool};
