//! # ansio
//!
//! ANSI escape sequence framing for writers.
//!
//! See <https://en.wikipedia.org/wiki/ANSI_escape_code> for a general
//! overview of ANSI codes.
//!
//! ## Overview
//!
//! ansio provides:
//! - **Escape framing**: [`esc`] composes `ESC start payload` and submits it
//!   to a writer as a single write
//! - **Wrapping writers**: [`SeqWriter`] reframes every write as
//!   `opening sequence + payload + closing sequence`, again as one
//!   downstream write
//! - **Terminal awareness**: [`Coder`] probes once, at construction, whether
//!   its writer is attached to an interactive terminal, and can apply
//!   framing either unconditionally ([`Coder::set`]) or only on a real
//!   terminal ([`Coder::set_if`])
//! - **Testability**: terminal detection is the [`TtyProbe`] capability
//!   trait, so tests can force either branch deterministically
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::io::Write;
//!
//! use ansio::{Coder, SeqSpec};
//!
//! fn main() -> std::io::Result<()> {
//!     let mut coder = Coder::new(std::io::stdout());
//!     // Sets the window title only when stdout is really a terminal;
//!     // redirected output receives the bare text.
//!     coder.set_if(SeqSpec::OSC_SET_TITLE).write_all(b"build ok")?;
//!     coder.flush()
//! }
//! ```
//!
//! ## Features
//!
//! - `sarge` - argument parsing integration and the `ansio_title` binary
//! - `miette` - pretty error reporting for CLI errors
//!
//! ## Concurrency
//!
//! The crate is fully synchronous and holds no locks of its own. Each
//! logical write through a [`SeqWriter`] is one downstream write call, but
//! nothing serializes distinct calls; writers sharing an underlying stream
//! inherit that stream's interleaving behavior. The terminal flag is
//! written once at construction and read-only afterwards.

// Core modules
pub mod cli;
pub mod coder;
pub mod error;
pub mod io;
pub mod seq;

// Re-exports for convenience
pub use coder::{Coder, SeqWriter};
pub use error::CliError;
pub use io::{InMemorySink, TtyProbe};
pub use seq::{ESC, SeqSpec, esc};

// Miette re-exports
#[cfg(feature = "miette")]
pub use error::CliDiagnostic;
