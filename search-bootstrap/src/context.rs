//! Application context holding the search client.
//!
//! The context owns the configuration and the bootstrapper, and keeps the
//! client created by the last successful bootstrap until `shutdown`.

use std::sync::{Arc, PoisonError, RwLock};
use tracing::debug;

use search_bootstrap_repository::{AppConfig, ConnectionError, LoggerFactory, SearchConnector};

use crate::bootstrap::ConnectionBootstrapper;

/// Slot holding the current client, empty until a bootstrap succeeds.
struct ClientSlot<T> {
    inner: RwLock<Option<Arc<T>>>,
}

impl<T> ClientSlot<T> {
    fn empty() -> Self {
        Self {
            inner: RwLock::new(None),
        }
    }

    fn get(&self) -> Option<Arc<T>> {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn set(&self, client: Arc<T>) {
        *self.inner.write().unwrap_or_else(PoisonError::into_inner) = Some(client);
    }

    fn take(&self) -> Option<Arc<T>> {
        self.inner
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
    }
}

/// Explicit home for the search client and the configuration it came from.
///
/// # Example
///
/// ```ignore
/// let context = AppContext::new(conf, OpenSearchConnector::new(), Arc::new(TracingLoggerFactory));
/// if let Some(client) = context.start().await? {
///     client.ping().send().await?;
/// }
/// context.shutdown();
/// ```
pub struct AppContext<C: SearchConnector> {
    conf: AppConfig,
    bootstrapper: ConnectionBootstrapper<C>,
    client: ClientSlot<C::Client>,
}

impl<C: SearchConnector> AppContext<C> {
    /// Create a context. No connection is made until `start`.
    pub fn new(conf: AppConfig, connector: C, loggers: Arc<dyn LoggerFactory>) -> Self {
        Self {
            conf,
            bootstrapper: ConnectionBootstrapper::new(connector, loggers.as_ref()),
            client: ClientSlot::empty(),
        }
    }

    /// The connector the context bootstraps with.
    pub fn connector(&self) -> &C {
        self.bootstrapper.connector()
    }

    /// The current client, if a bootstrap has succeeded.
    pub fn client(&self) -> Option<Arc<C::Client>> {
        self.client.get()
    }

    /// Bootstrap the connection and store the client.
    ///
    /// A successful bootstrap replaces any client already held. When the
    /// configuration is incomplete or the connection fails, the slot is left
    /// as it was.
    pub async fn start(&self) -> Result<Option<Arc<C::Client>>, ConnectionError> {
        let Some(client) = self.bootstrapper.start(&self.conf).await? else {
            return Ok(None);
        };

        let client = Arc::new(client);
        self.client.set(client.clone());

        Ok(Some(client))
    }

    /// Release the client held by the context.
    pub fn shutdown(&self) -> Option<Arc<C::Client>> {
        let client = self.client.take();
        debug!(released = client.is_some(), "Search context shut down");
        client
    }
}
