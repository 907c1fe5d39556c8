//! CLI integration helpers for ansio.
//!
//! This module provides the argument type consumed by the `ansio_title`
//! binary and a helper that performs its one operation: writing a window
//! title through a terminal-aware coder.
//!
//! # Example with sarge
//!
//! ```rust,ignore
//! use ansio::cli::TitleArgs;
//! use sarge::prelude::*;
//!
//! let mut reader = ArgumentReader::new();
//! let title_ref = reader.add::<TitleArgs>(tag::both('t', "title"));
//! let args = reader.parse()?;
//! ```

use std::io::{self, Write};

use crate::coder::Coder;
use crate::error::CliError;
use crate::seq::SeqSpec;

/// Title argument for the title-setting front end.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TitleArgs {
    /// Title text to set. Missing or empty is a usage error.
    pub title: Option<String>,
}

impl TitleArgs {
    /// Create new empty title arguments.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the title text.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Validate that a non-empty title was supplied.
    pub fn require_title(&self) -> Result<&str, CliError> {
        match self.title.as_deref() {
            Some(t) if !t.is_empty() => Ok(t),
            _ => Err(CliError::MissingTitle),
        }
    }
}

/// Write `title` through `coder` using the OSC 0 set-title sequence.
///
/// The sequence is framed only when the coder's writer is attached to a
/// terminal; redirected output receives the bare title text. Returns the
/// count reported by the underlying writer for the combined buffer.
pub fn write_title<W: Write>(coder: &mut Coder<W>, title: &str) -> io::Result<usize> {
    coder
        .set_if(SeqSpec::OSC_SET_TITLE)
        .write_framed(title.as_bytes())
}

#[cfg(feature = "sarge")]
mod sarge;
