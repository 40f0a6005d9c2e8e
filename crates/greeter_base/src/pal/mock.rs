use std::io;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::Mutex;

use crate::{GreeterError, GreeterResult};

use super::traits::Pal;

/* 📖 # Why record individual writes instead of one byte buffer?

Callers care about how many writes happened, not only about the final text:
one greet call must be exactly one write. Keeping each write as its own entry makes that countable.
*/

/// In-memory PAL implementation for testing.
///
/// Clones share the same recorded output, so a test can hand one clone to the code under test
/// and inspect the other.
///
/// # Examples
///
/// ```
/// use greeter_base::{MockPal, Pal};
///
/// let mock = MockPal::new();
/// mock.write_stdout("Hello, World!\n").unwrap();
/// assert_eq!(mock.stdout_contents(), "Hello, World!\n");
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockPal {
    stdout_writes: Arc<Mutex<Vec<String>>>,
    stdout_closed: Arc<AtomicBool>,
}

impl MockPal {
    /// Create a new MockPal with no recorded output.
    pub fn new() -> Self {
        Self::default()
    }

    /// Every write made to stdout, in order.
    pub fn stdout_writes(&self) -> Vec<String> {
        self.stdout_writes.lock().clone()
    }

    /// All stdout writes concatenated.
    pub fn stdout_contents(&self) -> String {
        self.stdout_writes.lock().concat()
    }

    /// Make subsequent stdout writes fail as if the stream had been closed.
    pub fn close_stdout(&self) {
        self.stdout_closed.store(true, Ordering::SeqCst);
    }
}

impl Pal for MockPal {
    fn write_stdout(&self, text: &str) -> GreeterResult<()> {
        if self.stdout_closed.load(Ordering::SeqCst) {
            return Err(Box::new(GreeterError::output(
                "stdout",
                io::Error::new(io::ErrorKind::BrokenPipe, "stdout is closed"),
            )));
        }
        self.stdout_writes.lock().push(text.to_string());
        Ok(())
    }
}
