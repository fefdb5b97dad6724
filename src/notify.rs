//! User-facing notification channel for failed calls.
//!
//! The HTTP client reports each failure once through a [`Notifier`]. The CLI uses
//! [`StderrNotifier`]; tests use [`RecordingNotifier`] to assert on messages.

use std::{
    io::{self, Write},
    sync::{Arc, Mutex, PoisonError},
};
use tracing::debug;

pub trait Notifier: Send + Sync {
    /// Surfaces `message` to the user. Must not block or fail.
    fn notify(&self, message: &str);
}

/// Writes notifications straight to stderr, independent of the log filter, and
/// mirrors them as a `debug` event for traces.
#[derive(Debug, Clone, Copy, Default)]
pub struct StderrNotifier;

impl Notifier for StderrNotifier {
    fn notify(&self, message: &str) {
        debug!(notification = message, "failure reported");
        // Nothing useful to do if stderr is gone.
        let _ = write_notification(&mut io::stderr().lock(), message);
    }
}

fn write_notification(out: &mut impl Write, message: &str) -> io::Result<()> {
    writeln!(out, "error: {message}")?;
    out.flush()
}

/// Keeps every message in memory, in order.
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    messages: Arc<Mutex<Vec<String>>>,
}

impl RecordingNotifier {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the messages received so far.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, message: &str) {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(message.to_string());
    }
}
