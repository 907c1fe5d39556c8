//! I/O capabilities and sinks.
//!
//! This module provides:
//! - `TtyProbe`: Optional capability for terminal detection on writers
//! - `InMemorySink`: Shared in-memory writer for tests and output capture

mod memory;
mod probe;

pub use memory::InMemorySink;
pub use probe::TtyProbe;
