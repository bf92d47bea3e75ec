//! Test doubles shared by the unit tests.

use async_trait::async_trait;
use std::io;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use search_bootstrap_repository::{
    ConnectionError, HostEntry, LoggerFactory, ModuleLogger, SearchConnector,
};

#[derive(Default)]
struct Lines {
    errors: Vec<String>,
    infos: Vec<String>,
}

/// Logger that records every line, whatever module it was handed out for.
#[derive(Clone, Default)]
pub struct RecordingLogger {
    lines: Arc<Mutex<Lines>>,
}

impl RecordingLogger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn errors(&self) -> Vec<String> {
        self.lines.lock().unwrap().errors.clone()
    }

    pub fn infos(&self) -> Vec<String> {
        self.lines.lock().unwrap().infos.clone()
    }
}

impl ModuleLogger for RecordingLogger {
    fn error(&self, message: &str) {
        self.lines.lock().unwrap().errors.push(message.to_string());
    }

    fn info(&self, message: &str) {
        self.lines.lock().unwrap().infos.push(message.to_string());
    }
}

impl LoggerFactory for RecordingLogger {
    fn module(&self, _name: &str) -> Arc<dyn ModuleLogger> {
        Arc::new(self.clone())
    }
}

/// Client handed out by `MockConnector`.
#[derive(Debug)]
pub struct MockClient {
    pub id: usize,
    pub hosts: Vec<HostEntry>,
}

/// Connector that never touches the network.
pub struct MockConnector {
    fail_connect: bool,
    fail_ping: bool,
    connect_calls: AtomicUsize,
    ping_calls: AtomicUsize,
}

impl MockConnector {
    pub fn new() -> Self {
        Self {
            fail_connect: false,
            fail_ping: false,
            connect_calls: AtomicUsize::new(0),
            ping_calls: AtomicUsize::new(0),
        }
    }

    pub fn failing_connect() -> Self {
        Self {
            fail_connect: true,
            ..Self::new()
        }
    }

    pub fn failing_ping() -> Self {
        Self {
            fail_ping: true,
            ..Self::new()
        }
    }

    pub fn connect_calls(&self) -> usize {
        self.connect_calls.load(Ordering::SeqCst)
    }

    pub fn ping_calls(&self) -> usize {
        self.ping_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SearchConnector for MockConnector {
    type Client = MockClient;

    fn connect(&self, hosts: &[HostEntry]) -> Result<MockClient, ConnectionError> {
        let id = self.connect_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_connect {
            return Err(ConnectionError::transport("Mock failure"));
        }
        Ok(MockClient {
            id,
            hosts: hosts.to_vec(),
        })
    }

    async fn ping(&self, _client: &MockClient) -> Result<(), ConnectionError> {
        self.ping_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_ping {
            return Err(ConnectionError::unreachable("Mock failure"));
        }
        Ok(())
    }
}

#[derive(Clone, Default)]
struct Buffer(Arc<Mutex<Vec<u8>>>);

impl io::Write for Buffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Run `f` under a plain-text subscriber and return everything it logged.
pub fn capture_logs(f: impl FnOnce()) -> String {
    let buffer = Buffer::default();
    let writer = buffer.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .finish();

    tracing::subscriber::with_default(subscriber, f);

    let bytes = buffer.0.lock().unwrap().clone();
    String::from_utf8(bytes).unwrap()
}
