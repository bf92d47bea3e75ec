//! Wiring for the bootstrap binary.

use std::sync::Arc;
use tracing::{error, info, warn};

use search_bootstrap_repository::OpenSearchConnector;

use crate::config::Settings;
use crate::context::AppContext;
use crate::logging::TracingLoggerFactory;
use crate::BootstrapError;

/// Open the connection described by `settings`, then release it.
///
/// # Returns
///
/// * `Ok(())` - The cluster answered the readiness check
/// * `Err(BootstrapError::NotConnected)` - The configuration was incomplete
/// * `Err(BootstrapError::ConnectionError)` - The connection failed
pub async fn run(settings: Settings) -> Result<(), BootstrapError> {
    let Settings { app, connector } = settings;

    let context = AppContext::new(
        app,
        OpenSearchConnector::with_options(connector),
        Arc::new(TracingLoggerFactory),
    );

    let started = context.start().await?;
    if started.is_none() {
        return Err(BootstrapError::NotConnected);
    }

    info!("Search client ready");
    context.shutdown();

    Ok(())
}

/// Log the outcome of `run` and map it to a process exit status.
///
/// Incomplete configuration was already logged as an error by the
/// bootstrapper, so it only gets a warning here.
pub fn exit_code(result: &Result<(), BootstrapError>) -> i32 {
    match result {
        Ok(()) => 0,
        Err(BootstrapError::NotConnected) => {
            warn!("Exiting without a search client");
            1
        }
        Err(e) => {
            error!(error = %e, "Bootstrap failed");
            1
        }
    }
}
