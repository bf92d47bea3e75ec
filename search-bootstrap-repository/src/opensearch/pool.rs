//! Round-robin connection pool over a fixed list of nodes.

use opensearch::http::transport::{Connection, ConnectionPool};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use url::Url;

use crate::errors::ConnectionError;

/// Hands out the configured nodes in turn, starting with the first.
///
/// Clones share the cursor, so every transport built from one pool keeps
/// rotating through the same sequence.
#[derive(Debug, Clone)]
pub struct RoundRobinConnectionPool {
    connections: Vec<Connection>,
    next: Arc<AtomicUsize>,
}

impl RoundRobinConnectionPool {
    /// Create a pool over `urls`, in order.
    ///
    /// # Returns
    ///
    /// * `Ok(RoundRobinConnectionPool)` - A pool with at least one node
    /// * `Err(ConnectionError)` - If `urls` is empty
    pub fn new(urls: Vec<Url>) -> Result<Self, ConnectionError> {
        if urls.is_empty() {
            return Err(ConnectionError::invalid_host("no hosts given"));
        }

        Ok(Self {
            connections: urls.into_iter().map(Connection::new).collect(),
            next: Arc::new(AtomicUsize::new(0)),
        })
    }

    /// Number of nodes in the pool.
    pub fn len(&self) -> usize {
        self.connections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.connections.is_empty()
    }

    fn next_index(&self) -> usize {
        self.next.fetch_add(1, Ordering::Relaxed) % self.connections.len()
    }
}

impl ConnectionPool for RoundRobinConnectionPool {
    fn next(&self) -> Connection {
        self.connections[self.next_index()].clone()
    }
}
