//! Interface definitions for the search bootstrap.
//!
//! This module defines the `SearchConnector` seam over the client library
//! and the logger interfaces injected into the bootstrapper.

mod logger;
mod search_connector;

pub use logger::{LoggerFactory, ModuleLogger};
pub use search_connector::SearchConnector;
