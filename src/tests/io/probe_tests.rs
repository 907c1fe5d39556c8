//! Tests for the terminal detection capability.

use std::io::Cursor;

use crate::io::{InMemorySink, TtyProbe};

#[test]
fn buffers_are_never_terminals() {
    assert!(!Vec::<u8>::new().is_tty());
    assert!(!Cursor::new(Vec::<u8>::new()).is_tty());
    assert!(!std::io::sink().is_tty());
    assert!(!InMemorySink::new().is_tty());
}

#[test]
fn regular_files_are_not_terminals() {
    let file = tempfile::tempfile().unwrap();
    assert!(!file.is_tty());
}

#[test]
fn references_and_boxes_delegate_to_the_inner_writer() {
    struct AlwaysTty;

    impl TtyProbe for AlwaysTty {
        fn is_tty(&self) -> bool {
            true
        }
    }

    let mut inner = AlwaysTty;
    assert!((&mut inner).is_tty());

    let boxed: Box<dyn TtyProbe> = Box::new(AlwaysTty);
    assert!(boxed.is_tty());
}

#[test]
fn custom_writers_default_to_not_a_terminal() {
    struct Plain;
    impl TtyProbe for Plain {}

    assert!(!Plain.is_tty());
}
