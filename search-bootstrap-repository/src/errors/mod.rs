//! Error types for the search bootstrap repository.

mod config_error;
mod connection_error;

pub use config_error::ConfigError;
pub use connection_error::ConnectionError;
