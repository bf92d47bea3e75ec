//! # Search Bootstrap
//!
//! Opens the application's Elasticsearch connection.
//!
//! This crate validates the `elasticsearch` configuration section, builds
//! the client through a `SearchConnector`, waits for the cluster to answer,
//! and keeps the resulting client in an `AppContext`.

pub mod app;
pub mod bootstrap;
pub mod config;
pub mod context;
pub mod logging;

#[cfg(test)]
pub(crate) mod testing;

pub use app::{exit_code, run};
pub use bootstrap::{ConnectionBootstrapper, MODULE_NAME};
pub use config::{Settings, SettingsError};
pub use context::AppContext;
pub use logging::TracingLoggerFactory;

use search_bootstrap_repository::ConnectionError;
use thiserror::Error;

/// Errors that can occur while running the bootstrap binary.
#[derive(Error, Debug)]
pub enum BootstrapError {
    /// Settings could not be loaded.
    #[error("Settings error: {0}")]
    SettingsError(#[from] SettingsError),

    /// The client could not be built or never became ready.
    #[error("Connection error: {0}")]
    ConnectionError(#[from] ConnectionError),

    /// The configuration was incomplete, so no client was created.
    #[error("No elasticsearch client was created")]
    NotConnected,
}
