//! Tests for framed writes through `set` and `set_if`.

use std::io::{self, Write};

use crate::coder::Coder;
use crate::seq::{ESC, SeqSpec};

struct Case {
    start: u8,
    end: u8,
    prefix: &'static str,
    suffix: &'static str,
    input: &'static str,
    want: &'static str,
}

const CASES: &[Case] = &[
    // No trailer, no prefix, no suffix.
    Case {
        start: b'a',
        end: 0,
        prefix: "",
        suffix: "",
        input: "OK",
        want: "\x1baOK",
    },
    // Trailer, no prefix, no suffix.
    Case {
        start: b'a',
        end: b'b',
        prefix: "",
        suffix: "",
        input: "OK",
        want: "\x1baOK\x1bb",
    },
    // Suffix, no prefix, no trailer.
    Case {
        start: b'a',
        end: 0,
        prefix: "",
        suffix: "cool",
        input: "OK",
        want: "\x1baOKcool",
    },
    // Suffix and trailer, no prefix.
    Case {
        start: b'a',
        end: b'b',
        prefix: "",
        suffix: "bye",
        input: "OK",
        want: "\x1baOK\x1bbbye",
    },
    // Prefix, no trailer, no suffix.
    Case {
        start: b'a',
        end: 0,
        prefix: "A-",
        suffix: "",
        input: "OK",
        want: "\x1baA-OK",
    },
    // Prefix and suffix, no trailer.
    Case {
        start: b'a',
        end: 0,
        prefix: "A-",
        suffix: "-mate",
        input: "OK",
        want: "\x1baA-OK-mate",
    },
    // Prefix, suffix, and trailer.
    Case {
        start: b'a',
        end: b'b',
        prefix: "A-",
        suffix: "-mate",
        input: "OK",
        want: "\x1baA-OK\x1bb-mate",
    },
];

#[test]
fn set_frames_writes_regardless_of_tty_flag() {
    for case in CASES {
        for tty in [false, true] {
            let mut coder = Coder::with_tty(Vec::new(), tty);
            let spec = SeqSpec::new(case.start, case.prefix, case.end, case.suffix);

            coder.set(spec).write_all(case.input.as_bytes()).unwrap();

            assert_eq!(
                coder.into_inner(),
                case.want.as_bytes(),
                "set({}, {:?}, {}, {:?}) write {:?} tty={tty}",
                case.start,
                case.prefix,
                case.end,
                case.suffix,
                case.input,
            );
        }
    }
}

#[test]
fn set_if_frames_only_on_a_tty() {
    for case in CASES {
        for tty in [false, true] {
            let mut coder = Coder::with_tty(Vec::new(), tty);
            let spec = SeqSpec::new(case.start, case.prefix, case.end, case.suffix);
            let want = if tty { case.want } else { case.input };

            coder.set_if(spec).write_all(case.input.as_bytes()).unwrap();

            assert_eq!(
                coder.into_inner(),
                want.as_bytes(),
                "set_if({}, {:?}, {}, {:?}) write {:?} tty={tty}",
                case.start,
                case.prefix,
                case.end,
                case.suffix,
                case.input,
            );
        }
    }
}

#[test]
fn write_framed_reports_the_combined_count() {
    let mut coder = Coder::with_tty(Vec::new(), true);

    // ESC + 'a' + "A-" + "OK" + "-mate": 2 + 2 + 2 + 5 bytes.
    let n = coder
        .set(SeqSpec::new(b'a', "A-", 0, "-mate"))
        .write_framed(b"OK")
        .unwrap();

    assert_eq!(n, 11);
}

#[test]
fn framed_write_reports_the_payload_count() {
    let mut coder = Coder::with_tty(Vec::new(), true);

    // The Write contract caps the count at the payload length; the
    // framing bytes are accounted for by write_framed instead.
    let n = coder
        .set(SeqSpec::new(b'a', "A-", 0, "-mate"))
        .write(b"OK")
        .unwrap();

    assert_eq!(n, 2);
    assert_eq!(coder.into_inner(), b"\x1baA-OK-mate");
}

#[test]
fn write_all_drives_a_framed_writer_without_losing_bytes() {
    let mut coder = Coder::with_tty(Vec::new(), true);

    coder
        .set(SeqSpec::new(b'a', "A-", b'b', "bye"))
        .write_all(b"OK")
        .unwrap();

    assert_eq!(coder.into_inner(), b"\x1baA-OK\x1bbbye");
}

#[test]
fn passthrough_write_reports_the_payload_count() {
    let mut coder = Coder::with_tty(Vec::new(), false);

    let n = coder
        .set_if(SeqSpec::new(b'a', "A-", 0, "-mate"))
        .write(b"OK")
        .unwrap();

    assert_eq!(n, 2);
    assert_eq!(coder.into_inner(), b"OK");
}

#[test]
fn zero_markers_with_text_emit_no_escape_bytes() {
    let mut coder = Coder::with_tty(Vec::new(), true);

    coder
        .set(SeqSpec::new(0, "A-", 0, "-mate"))
        .write_all(b"OK")
        .unwrap();

    let out = coder.into_inner();
    assert_eq!(out, b"A-OK-mate");
    assert!(!out.contains(&ESC));
}

#[test]
fn each_write_is_framed_independently() {
    let mut coder = Coder::with_tty(Vec::new(), true);
    let spec = SeqSpec::new(b'a', "", b'b', "");

    {
        let mut w = coder.set(spec);
        w.write_all(b"one").unwrap();
        w.write_all(b"two").unwrap();
    }

    assert_eq!(coder.into_inner(), b"\x1baone\x1bb\x1batwo\x1bb");
}

/// Writer that records each write call as a separate chunk.
#[derive(Default)]
struct ChunkWriter {
    chunks: Vec<Vec<u8>>,
}

impl Write for ChunkWriter {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.chunks.push(data.to_vec());
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn framed_write_issues_a_single_downstream_write() {
    let mut coder = Coder::with_tty(ChunkWriter::default(), true);

    coder
        .set(SeqSpec::new(b'a', "A-", b'b', "bye"))
        .write_all(b"OK")
        .unwrap();

    let chunks = coder.into_inner().chunks;
    assert_eq!(chunks.len(), 1);
    assert_eq!(chunks[0], b"\x1baA-OK\x1bbbye");
}

struct FailWriter;

impl Write for FailWriter {
    fn write(&mut self, _data: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::WriteZero, "disk full"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn framed_write_propagates_sink_errors() {
    let mut coder = Coder::with_tty(FailWriter, true);

    let err = coder
        .set(SeqSpec::new(b'a', "", 0, ""))
        .write(b"OK")
        .unwrap_err();

    assert_eq!(err.kind(), io::ErrorKind::WriteZero);
}
