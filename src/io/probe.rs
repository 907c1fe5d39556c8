//! Terminal detection capability for writers.

use std::fs::File;
use std::io::{self, IsTerminal};

/// Optional capability for writers that may be attached to an interactive
/// terminal.
///
/// The default implementation reports `false`, which is the correct answer
/// for any writer without a backing OS stream (in-memory buffers, adapters,
/// and the like) — absence of detectability is "not a terminal", never an
/// error. Writers backed by a real stream override this to consult the OS.
///
/// [`Coder::new`](crate::Coder::new) consumes this capability once, at
/// construction. Implement it for custom writer types to opt into
/// detection, or use [`Coder::with_tty`](crate::Coder::with_tty) to supply
/// the answer directly.
pub trait TtyProbe {
    /// Report whether this writer is attached to an interactive terminal.
    fn is_tty(&self) -> bool {
        false
    }
}

impl TtyProbe for io::Stdout {
    fn is_tty(&self) -> bool {
        self.is_terminal()
    }
}

impl TtyProbe for io::StdoutLock<'_> {
    fn is_tty(&self) -> bool {
        self.is_terminal()
    }
}

impl TtyProbe for io::Stderr {
    fn is_tty(&self) -> bool {
        self.is_terminal()
    }
}

impl TtyProbe for io::StderrLock<'_> {
    fn is_tty(&self) -> bool {
        self.is_terminal()
    }
}

impl TtyProbe for File {
    fn is_tty(&self) -> bool {
        self.is_terminal()
    }
}

impl TtyProbe for Vec<u8> {}

impl<T> TtyProbe for io::Cursor<T> {}

impl TtyProbe for io::Sink {}

impl<P: TtyProbe + ?Sized> TtyProbe for &mut P {
    fn is_tty(&self) -> bool {
        (**self).is_tty()
    }
}

impl<P: TtyProbe + ?Sized> TtyProbe for Box<P> {
    fn is_tty(&self) -> bool {
        (**self).is_tty()
    }
}
