//! `tracing`-backed module loggers and subscriber setup.

use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use search_bootstrap_repository::{LoggerFactory, ModuleLogger};

/// Hands out loggers that forward to `tracing` with a `module` field.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLoggerFactory;

impl LoggerFactory for TracingLoggerFactory {
    fn module(&self, name: &str) -> Arc<dyn ModuleLogger> {
        Arc::new(TracingLogger {
            module: name.to_string(),
        })
    }
}

/// Module logger emitting `tracing` events.
#[derive(Debug, Clone)]
pub struct TracingLogger {
    module: String,
}

impl ModuleLogger for TracingLogger {
    fn error(&self, message: &str) {
        error!(module = %self.module, "{}", message);
    }

    fn info(&self, message: &str) {
        info!(module = %self.module, "{}", message);
    }
}

/// Install the global subscriber. `RUST_LOG` overrides the `info` default.
pub fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}
