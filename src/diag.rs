//! Diagnostic Output Sinks

use std::sync::Mutex;

/// Destination for user-facing diagnostic messages.
///
/// The loader and the override merge report through an injected sink
/// instead of a global stream, so callers decide where diagnostics land.
/// Sinks are best-effort and must never fail.
pub trait DiagnosticSink: Send + Sync {
    /// Emit one message
    fn log(&self, message: &str);
}

/// Writes each message to stderr, keeping stdout free for program output
#[derive(Debug, Default)]
pub struct StderrSink;

impl DiagnosticSink for StderrSink {
    fn log(&self, message: &str) {
        eprintln!("{}", message);
    }
}

/// Forwards each message to `tracing` at info level
#[derive(Debug, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn log(&self, message: &str) {
        tracing::info!("{}", message);
    }
}

/// Buffers messages in memory so tests can assert on emitted diagnostics
#[derive(Debug, Default)]
pub struct MemorySink {
    messages: Mutex<Vec<String>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all messages logged so far
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }

    /// True if nothing has been logged
    pub fn is_empty(&self) -> bool {
        self.messages.lock().unwrap().is_empty()
    }
}

impl DiagnosticSink for MemorySink {
    fn log(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }
}
