//! Diagnostics capability used by the extension components.
//!
//! Components log through a named channel rather than calling `tracing`
//! directly, so tests can swap in [`MemoryLog`] and assert on what was
//! reported.

use std::sync::Mutex;

/// Severity accepted by the log sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
    Info,
    Debug,
}

/// A named diagnostic channel.
pub trait ChannelLog {
    fn log(&self, severity: Severity, message: &str);

    fn error(&self, message: &str) {
        self.log(Severity::Error, message);
    }
}

impl<L: ChannelLog + ?Sized> ChannelLog for &L {
    fn log(&self, severity: Severity, message: &str) {
        (**self).log(severity, message);
    }
}

/// Production channel that forwards to `tracing`.
#[derive(Debug, Clone, Copy)]
pub struct TracingLog {
    channel: &'static str,
}

impl TracingLog {
    pub fn channel(name: &'static str) -> Self {
        Self { channel: name }
    }
}

impl ChannelLog for TracingLog {
    fn log(&self, severity: Severity, message: &str) {
        match severity {
            Severity::Error => tracing::error!(channel = self.channel, "{}", message),
            Severity::Warning => tracing::warn!(channel = self.channel, "{}", message),
            Severity::Info => tracing::info!(channel = self.channel, "{}", message),
            Severity::Debug => tracing::debug!(channel = self.channel, "{}", message),
        }
    }
}

/// Sink that keeps records in memory so tests can assert on them.
#[derive(Debug, Default)]
pub struct MemoryLog {
    records: Mutex<Vec<(Severity, String)>>,
}

impl MemoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> Vec<(Severity, String)> {
        self.records.lock().unwrap().clone()
    }

    pub fn error_count(&self) -> usize {
        self.records
            .lock()
            .unwrap()
            .iter()
            .filter(|(severity, _)| *severity == Severity::Error)
            .count()
    }
}

impl ChannelLog for MemoryLog {
    fn log(&self, severity: Severity, message: &str) {
        self.records
            .lock()
            .unwrap()
            .push((severity, message.to_string()));
    }
}
