//! Configuration error types.
//!
//! The `Display` output of each variant is the exact line logged when a
//! bootstrap is aborted for that reason.

use thiserror::Error;

/// Errors raised while validating the `elasticsearch` configuration section.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The configuration has no `elasticsearch` section.
    #[error("No elasticsearch configuration found")]
    MissingSection,

    /// The `elasticsearch` section defines neither `host` nor `hosts`.
    #[error("No elasticsearch configuration hosts found")]
    MissingHosts,
}
