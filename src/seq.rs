//! Escape sequence framing primitives.

use std::io::{self, Write};

/// The escape byte (0x1B) that introduces every ANSI control sequence.
pub const ESC: u8 = 0x1b;

/// Emit an escape sequence to `w` having the form:
///
/// ```text
/// ESC start [data]
/// ```
///
/// Returns the number of bytes accepted by `w` and any error from its
/// `write`. The sequence is composed into one buffer and submitted as a
/// single write call.
///
/// A `start` of zero is reserved to mean "no escape": the payload is
/// written as-is, with no ESC byte prepended.
pub fn esc<W: Write + ?Sized>(w: &mut W, start: u8, data: &str) -> io::Result<usize> {
    if start == 0 {
        return w.write(data.as_bytes());
    }
    let mut buf = Vec::with_capacity(2 + data.len()); // 2 for ESC start
    buf.push(ESC);
    buf.push(start);
    buf.extend_from_slice(data.as_bytes());
    w.write(&buf)
}

/// Describes how a [`SeqWriter`](crate::SeqWriter) frames each payload:
///
/// ```text
/// [ESC start] prefix <payload> [ESC end] suffix
/// ```
///
/// A marker byte of zero omits that marker (and its ESC byte) entirely; an
/// empty prefix or suffix omits that text. The two are independent: a spec
/// with `start = 0` and a nonempty prefix still emits the prefix
/// immediately before the payload. No other validation is performed; any
/// byte 1-255 is a legal marker and any string a legal prefix or suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeqSpec<'a> {
    /// Byte following ESC in the opening sequence. Zero omits the opener.
    pub start: u8,
    /// Text emitted between the opening sequence and the payload.
    pub prefix: &'a str,
    /// Byte following ESC in the closing sequence. Zero omits the closer.
    pub end: u8,
    /// Text emitted after the closing sequence.
    pub suffix: &'a str,
}

impl<'a> SeqSpec<'a> {
    /// Create a spec from its four parts.
    pub const fn new(start: u8, prefix: &'a str, end: u8, suffix: &'a str) -> Self {
        Self {
            start,
            prefix,
            end,
            suffix,
        }
    }
}

impl SeqSpec<'static> {
    /// OSC 0: set the terminal window title, terminated by BEL.
    ///
    /// Writing `title` through this spec emits `ESC ] 0 ; title BEL`.
    pub const OSC_SET_TITLE: Self = Self::new(b']', "0;", 0, "\x07");
}
