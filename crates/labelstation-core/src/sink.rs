//! Log sinks injected into the dispatcher.
//!
//! The dispatcher reports progress to two sinks: one for operational
//! notices and one for failures. The defaults forward to the [`log`] facade;
//! [`MemorySink`] keeps messages in memory for callers that want to show
//! them elsewhere.

use std::sync::{Mutex, PoisonError};

/// A destination for formatted log messages.
pub trait LogSink: Send + Sync {
    fn log(&self, message: &str);
}

impl<F> LogSink for F
where
    F: Fn(&str) + Send + Sync,
{
    fn log(&self, message: &str) {
        self(message)
    }
}

/// Forwards messages to `log::info!`.
#[derive(Debug, Clone, Copy, Default)]
pub struct InfoLog;

impl LogSink for InfoLog {
    fn log(&self, message: &str) {
        log::info!("{message}");
    }
}

/// Forwards messages to `log::error!`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ErrorLog;

impl LogSink for ErrorLog {
    fn log(&self, message: &str) {
        log::error!("{message}");
    }
}

/// Collects messages in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    messages: Mutex<Vec<String>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// A copy of every message logged so far.
    pub fn messages(&self) -> Vec<String> {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl LogSink for MemorySink {
    fn log(&self, message: &str) {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(message.to_string());
    }
}
