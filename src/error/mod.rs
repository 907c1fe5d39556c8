//! Error types for the ansio CLI surface.
//!
//! The framing core itself introduces no error kinds: composing a sequence
//! cannot fail, so [`esc`](crate::esc) and
//! [`SeqWriter`](crate::SeqWriter) surface the destination's `io::Error`
//! verbatim, with no retry, wrapping, or suppression. `CliError` covers
//! only the command-line front end built on top.

use std::io;

use thiserror::Error;

/// Errors reported by the title-setting CLI front end.
#[derive(Debug, Error)]
pub enum CliError {
    /// The required title text was missing or empty.
    #[error("you must specify a --title to set")]
    MissingTitle,

    /// Writing the escape sequence to the output stream failed.
    #[error("write to '{target}' failed: {source}")]
    Write {
        /// Identifier of the destination ("-" for stdout).
        target: String,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },
}

impl CliError {
    /// Create a `Write` error for the given destination.
    pub fn write(target: impl Into<String>, source: io::Error) -> Self {
        Self::Write {
            target: target.into(),
            source,
        }
    }
}

#[cfg(feature = "miette")]
mod miette_impl;

#[cfg(feature = "miette")]
pub use miette_impl::CliDiagnostic;
