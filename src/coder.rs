//! Terminal-aware escape sequence coder.

use std::io::{self, Write};

use crate::io::TtyProbe;
use crate::seq::{SeqSpec, esc};

/// Wraps a writer and adds helpers for emitting ANSI escape sequences.
///
/// A `Coder` is itself a writer that delegates every direct write,
/// unmodified, to the wrapped writer. Whether the wrapped writer is
/// attached to an interactive terminal is probed exactly once at
/// construction and never re-evaluated.
#[derive(Debug)]
pub struct Coder<W> {
    w: W,
    is_tty: bool,
}

impl<W: Write + TtyProbe> Coder<W> {
    /// Construct a coder that writes to `w`, probing its terminal status
    /// through the [`TtyProbe`] capability.
    pub fn new(w: W) -> Self {
        let is_tty = w.is_tty();
        Self { w, is_tty }
    }
}

impl<W: Write> Coder<W> {
    /// Construct a coder with an explicit terminal flag, skipping the probe.
    ///
    /// Useful for tests and for callers that already know the answer.
    pub fn with_tty(w: W, is_tty: bool) -> Self {
        Self { w, is_tty }
    }

    /// Whether the wrapped writer was attached to a terminal at
    /// construction time.
    pub fn is_tty(&self) -> bool {
        self.is_tty
    }

    /// Consume the coder and return the wrapped writer.
    pub fn into_inner(self) -> W {
        self.w
    }

    /// Returns a writer that unconditionally wraps each write with the
    /// escape sequence described by `spec`:
    ///
    /// ```text
    /// [ESC start] prefix <payload> [ESC end] suffix
    /// ```
    pub fn set<'a>(&'a mut self, spec: SeqSpec<'a>) -> SeqWriter<'a, W> {
        SeqWriter {
            spec: Some(spec),
            w: &mut self.w,
        }
    }

    /// Returns a writer that wraps each write with `spec` if the wrapped
    /// writer is attached to a terminal. Otherwise writes pass through
    /// unframed, byte-identical to writing the wrapped writer directly.
    pub fn set_if<'a>(&'a mut self, spec: SeqSpec<'a>) -> SeqWriter<'a, W> {
        SeqWriter {
            spec: self.is_tty.then_some(spec),
            w: &mut self.w,
        }
    }
}

impl<W: Write> Write for Coder<W> {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.w.write(data)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.w.flush()
    }
}

/// A writer that frames every write with an escape sequence.
///
/// Each call is self-contained: the opening sequence, the payload, and the
/// closing sequence are composed into one buffer and submitted to the
/// underlying writer as one combined write. Nothing is buffered across
/// calls.
///
/// The `Write` impl reports the payload length on success, as the trait
/// contract requires (`write_all` and friends depend on the count never
/// exceeding the payload). Callers that need the count the underlying
/// writer accepted for the combined buffer, framing bytes included, use
/// [`SeqWriter::write_framed`].
///
/// A `SeqWriter` with no spec (produced by [`Coder::set_if`] on a
/// non-terminal writer) delegates writes unmodified.
#[derive(Debug)]
pub struct SeqWriter<'a, W> {
    spec: Option<SeqSpec<'a>>,
    w: &'a mut W,
}

impl<W: Write> SeqWriter<'_, W> {
    /// Write `data` framed by the spec, returning the count the underlying
    /// writer accepted for the combined buffer. Because framing markers add
    /// bytes, the count can exceed `data.len()`; a pass-through writer
    /// reports the payload count.
    ///
    /// Errors from the underlying writer are returned unmodified.
    pub fn write_framed(&mut self, data: &[u8]) -> io::Result<usize> {
        let Some(spec) = self.spec else {
            return self.w.write(data);
        };
        let buf = compose(&spec, data);
        self.w.write(&buf)
    }
}

/// Compose the combined frame buffer. Writing into a `Vec` cannot fail,
/// so the `esc` results carry no information here.
fn compose(spec: &SeqSpec<'_>, data: &[u8]) -> Vec<u8> {
    // 2 for ESC start, 2 for ESC end
    let size = data.len() + spec.prefix.len() + spec.suffix.len() + 4;
    let mut buf = Vec::with_capacity(size);
    let _ = esc(&mut buf, spec.start, spec.prefix);
    buf.extend_from_slice(data);
    let _ = esc(&mut buf, spec.end, spec.suffix);
    buf
}

impl<W: Write> Write for SeqWriter<'_, W> {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        let Some(spec) = self.spec else {
            return self.w.write(data);
        };
        let buf = compose(&spec, data);
        self.w.write_all(&buf)?;
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.w.flush()
    }
}
