//! Diagnostic sink port for operator-facing progress lines.
//!
//! This is a write-only channel separate from `tracing`: the CLI prints it
//! to stderr on request, tests record it, and most callers pass nothing.
//! Nothing may depend on a sink being present.

use std::sync::Mutex;

/// Port for appending human-readable progress lines.
pub trait DiagnosticSink: Send + Sync {
    /// Append one line (without trailing newline).
    fn line(&self, message: &str);
}

/// Sink that discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl DiagnosticSink for NoopSink {
    fn line(&self, _message: &str) {}
}

/// Sink that forwards lines to `tracing` at info level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn line(&self, message: &str) {
        tracing::info!(target: "toolhome::diagnostics", "{message}");
    }
}

/// Sink that keeps lines in memory until they are replayed elsewhere.
///
/// Used where the producer cannot borrow the final sink, e.g. inside
/// `spawn_blocking` or on the far side of a process boundary.
#[derive(Debug, Default)]
pub struct BufferedSink {
    lines: Mutex<Vec<String>>,
}

impl BufferedSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take all buffered lines, leaving the buffer empty.
    pub fn take(&self) -> Vec<String> {
        self.lines
            .lock()
            .map(|mut lines| std::mem::take(&mut *lines))
            .unwrap_or_default()
    }

    /// Forward all buffered lines to `sink`, in order.
    pub fn replay_into(&self, sink: &dyn DiagnosticSink) {
        for line in self.take() {
            sink.line(&line);
        }
    }
}

impl DiagnosticSink for BufferedSink {
    fn line(&self, message: &str) {
        if let Ok(mut lines) = self.lines.lock() {
            lines.push(message.to_string());
        }
    }
}
