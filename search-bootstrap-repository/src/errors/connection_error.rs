//! Connection error types.
//!
//! This module defines the errors that can occur while constructing a client
//! or waiting for it to become ready.

use thiserror::Error;

/// Errors that can occur while opening a connection to the search engine.
#[derive(Error, Debug)]
pub enum ConnectionError {
    /// A host entry could not be turned into a node URL.
    #[error("Invalid host: {0}")]
    InvalidHost(String),

    /// The client transport could not be built.
    #[error("Transport error: {0}")]
    Transport(String),

    /// The readiness request could not reach any node.
    #[error("Unreachable: {0}")]
    Unreachable(String),

    /// A node answered the readiness request with a failure status.
    #[error("Unavailable: {0}")]
    Unavailable(String),
}

impl ConnectionError {
    /// Create an invalid host error.
    pub fn invalid_host(msg: impl Into<String>) -> Self {
        Self::InvalidHost(msg.into())
    }

    /// Create a transport error.
    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }

    /// Create an unreachable error.
    pub fn unreachable(msg: impl Into<String>) -> Self {
        Self::Unreachable(msg.into())
    }

    /// Create an unavailable error.
    pub fn unavailable(msg: impl Into<String>) -> Self {
        Self::Unavailable(msg.into())
    }
}
