//! Logger interfaces.

use std::sync::Arc;

/// A logger scoped to one module of the application.
pub trait ModuleLogger: Send + Sync {
    /// Log an error line.
    fn error(&self, message: &str);

    /// Log an informational line.
    fn info(&self, message: &str);
}

/// Hands out module-scoped loggers.
pub trait LoggerFactory: Send + Sync {
    /// Return the logger for the module called `name`.
    fn module(&self, name: &str) -> Arc<dyn ModuleLogger>;
}
