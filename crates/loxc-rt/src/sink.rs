//! The `print` statement's output seam (SPEC_FULL §C "Output sink"):
//! the interpreter writes through an injected [`std::io::Write`] rather
//! than calling `println!` directly, so a test can capture output
//! without spawning the built CLI binary.

use std::cell::RefCell;
use std::io::{self, Write};
use std::rc::Rc;

/// An in-memory sink for tests: cheaply clonable, captures everything
/// written to it in order.
#[derive(Clone, Default)]
pub struct MemorySink(Rc<RefCell<Vec<u8>>>);

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.borrow()).into_owned()
    }
}

impl Write for MemorySink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.borrow_mut().write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
