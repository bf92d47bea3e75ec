//! The connection bootstrapper.
//!
//! Validates the `elasticsearch` section, logs progress through the injected
//! module logger and hands back a ready client.

use std::sync::Arc;
use tracing::instrument;

use search_bootstrap_repository::config::display_hosts;
use search_bootstrap_repository::{
    AppConfig, ConnectionError, ElasticsearchConfig, LoggerFactory, ModuleLogger, SearchConnector,
};

/// Name of the module logger the bootstrapper writes to.
pub const MODULE_NAME: &str = "elasticsearch";

/// Opens a client from the `elasticsearch` configuration section.
pub struct ConnectionBootstrapper<C> {
    connector: C,
    log: Arc<dyn ModuleLogger>,
}

impl<C: SearchConnector> ConnectionBootstrapper<C> {
    /// Create a bootstrapper that logs to the `elasticsearch` module logger.
    pub fn new(connector: C, loggers: &dyn LoggerFactory) -> Self {
        Self {
            connector,
            log: loggers.module(MODULE_NAME),
        }
    }

    /// The connector used to build clients.
    pub fn connector(&self) -> &C {
        &self.connector
    }

    /// Run the bootstrap once.
    ///
    /// Missing configuration is logged on the error channel and yields
    /// `Ok(None)`. Connection failures are returned as errors after the
    /// `Connecting to` line has been logged.
    ///
    /// # Returns
    ///
    /// * `Ok(Some(client))` - The cluster answered and the client is ready
    /// * `Ok(None)` - The configuration was incomplete
    /// * `Err(ConnectionError)` - The client could not be built or never became ready
    #[instrument(skip_all)]
    pub async fn start(&self, conf: &AppConfig) -> Result<Option<C::Client>, ConnectionError> {
        let hosts = match conf.elasticsearch().and_then(ElasticsearchConfig::hosts) {
            Ok(hosts) => hosts,
            Err(e) => {
                self.log.error(&e.to_string());
                return Ok(None);
            }
        };

        let display = display_hosts(&hosts);
        self.log.info(&format!("Connecting to {}", display));

        let client = self.connector.connect(&hosts)?;
        self.connector.ping(&client).await?;

        self.log.info(&format!("Connected to {}", display));

        Ok(Some(client))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{MockConnector, RecordingLogger};
    use search_bootstrap_repository::{HostDescriptor, HostEntry};

    fn bootstrapper(
        connector: MockConnector,
        log: &RecordingLogger,
    ) -> ConnectionBootstrapper<MockConnector> {
        ConnectionBootstrapper::new(connector, log)
    }

    #[tokio::test]
    async fn test_missing_section_logs_error() {
        let log = RecordingLogger::new();
        let bootstrapper = bootstrapper(MockConnector::new(), &log);

        let client = bootstrapper.start(&AppConfig::default()).await.unwrap();

        assert!(client.is_none());
        assert!(log.infos().is_empty());
        assert_eq!(log.errors().len(), 1);
        assert!(log.errors()[0].contains("No elasticsearch configuration found"));
        assert_eq!(bootstrapper.connector().connect_calls(), 0);
    }

    #[tokio::test]
    async fn test_missing_hosts_logs_error() {
        let log = RecordingLogger::new();
        let bootstrapper = bootstrapper(MockConnector::new(), &log);
        let conf = AppConfig::with_elasticsearch(ElasticsearchConfig::default());

        let client = bootstrapper.start(&conf).await.unwrap();

        assert!(client.is_none());
        assert!(log.infos().is_empty());
        assert_eq!(log.errors().len(), 1);
        assert!(log.errors()[0].contains("No elasticsearch configuration hosts found"));
        assert_eq!(bootstrapper.connector().connect_calls(), 0);
    }

    #[tokio::test]
    async fn test_single_host() {
        let log = RecordingLogger::new();
        let bootstrapper = bootstrapper(MockConnector::new(), &log);
        let conf = AppConfig::with_elasticsearch(ElasticsearchConfig::single("localhost:9200"));

        let client = bootstrapper.start(&conf).await.unwrap();

        let client = client.expect("client should be created");
        assert_eq!(client.hosts, vec![HostEntry::from("localhost:9200")]);
        assert!(log.errors().is_empty());
        assert_eq!(log.infos().len(), 2);
        assert!(log.infos()[0].contains("Connecting to localhost:9200"));
        assert!(log.infos()[1].contains("Connected to localhost:9200"));
    }

    #[tokio::test]
    async fn test_string_hosts() {
        let log = RecordingLogger::new();
        let bootstrapper = bootstrapper(MockConnector::new(), &log);
        let conf = AppConfig::with_elasticsearch(ElasticsearchConfig::multiple([
            "localhost:9200",
            "localhost:9201",
        ]));

        let client = bootstrapper.start(&conf).await.unwrap();

        assert!(client.is_some());
        assert!(log.errors().is_empty());
        assert_eq!(log.infos().len(), 2);
        assert!(log.infos()[0].contains("Connecting to localhost:9200, localhost:9201"));
        assert!(log.infos()[1].contains("Connected to localhost:9200, localhost:9201"));
    }

    #[tokio::test]
    async fn test_descriptor_hosts() {
        let log = RecordingLogger::new();
        let bootstrapper = bootstrapper(MockConnector::new(), &log);
        let hosts = vec![
            HostDescriptor::new("http", "localhost", 9200),
            HostDescriptor::new("http", "localhost", 9201),
        ];
        let conf = AppConfig::with_elasticsearch(ElasticsearchConfig::multiple(hosts.clone()));

        let client = bootstrapper.start(&conf).await.unwrap();

        // The connector sees the descriptors untouched, protocol included.
        let client = client.expect("client should be created");
        assert_eq!(
            client.hosts,
            hosts.into_iter().map(HostEntry::from).collect::<Vec<_>>()
        );
        assert!(log.errors().is_empty());
        assert_eq!(log.infos().len(), 2);
        assert!(log.infos()[0].contains("Connecting to localhost:9200, localhost:9201"));
        assert!(log.infos()[1].contains("Connected to localhost:9200, localhost:9201"));
    }

    #[tokio::test]
    async fn test_single_descriptor_host() {
        let log = RecordingLogger::new();
        let bootstrapper = bootstrapper(MockConnector::new(), &log);
        let host = HostDescriptor::new("https", "localhost", 9243);
        let conf = AppConfig::with_elasticsearch(ElasticsearchConfig::single(host.clone()));

        let client = bootstrapper.start(&conf).await.unwrap();

        let client = client.expect("client should be created");
        assert_eq!(client.hosts, vec![HostEntry::from(host)]);
        assert!(log.errors().is_empty());
        assert_eq!(
            log.infos(),
            vec![
                "Connecting to localhost:9243".to_string(),
                "Connected to localhost:9243".to_string()
            ]
        );
    }

    #[tokio::test]
    async fn test_hosts_win_over_host() {
        let log = RecordingLogger::new();
        let bootstrapper = bootstrapper(MockConnector::new(), &log);
        let conf = AppConfig::with_elasticsearch(ElasticsearchConfig {
            host: Some("localhost:9999".into()),
            hosts: Some(vec!["localhost:9200".into()]),
        });

        let client = bootstrapper.start(&conf).await.unwrap().unwrap();

        assert_eq!(client.hosts, vec![HostEntry::from("localhost:9200")]);
        assert!(log.infos()[0].contains("Connecting to localhost:9200"));
    }

    #[tokio::test]
    async fn test_ping_failure_propagates() {
        let log = RecordingLogger::new();
        let bootstrapper = bootstrapper(MockConnector::failing_ping(), &log);
        let conf = AppConfig::with_elasticsearch(ElasticsearchConfig::single("localhost:9200"));

        let result = bootstrapper.start(&conf).await;

        assert!(matches!(result, Err(ConnectionError::Unreachable(_))));
        assert!(log.errors().is_empty());
        assert_eq!(log.infos(), vec!["Connecting to localhost:9200".to_string()]);
    }

    #[tokio::test]
    async fn test_connect_failure_propagates() {
        let log = RecordingLogger::new();
        let bootstrapper = bootstrapper(MockConnector::failing_connect(), &log);
        let conf = AppConfig::with_elasticsearch(ElasticsearchConfig::single("localhost:9200"));

        let result = bootstrapper.start(&conf).await;

        assert!(matches!(result, Err(ConnectionError::Transport(_))));
        assert_eq!(log.infos().len(), 1);
        assert_eq!(bootstrapper.connector().ping_calls(), 0);
    }
}
