//! In-memory writer for testing and output capture.

use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use super::TtyProbe;

/// In-memory writer that records everything written to it.
///
/// Clones share the same buffer, so a test can hand one clone to a
/// [`Coder`](crate::Coder) and inspect the captured bytes through another.
#[derive(Debug, Clone, Default)]
pub struct InMemorySink {
    buf: Arc<Mutex<Vec<u8>>>,
}

impl InMemorySink {
    /// Create a new empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the captured bytes.
    pub fn contents(&self) -> Vec<u8> {
        self.buf.lock().unwrap().clone()
    }

    /// Get the captured bytes as a (lossy) string.
    pub fn contents_string(&self) -> String {
        String::from_utf8_lossy(&self.contents()).into_owned()
    }

    /// Clear the captured bytes.
    pub fn clear(&self) {
        self.buf.lock().unwrap().clear();
    }
}

impl Write for InMemorySink {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        let mut guard = self.buf.lock().unwrap();
        guard.extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// An in-memory buffer never has a backing terminal.
impl TtyProbe for InMemorySink {}
