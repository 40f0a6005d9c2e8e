use std::sync::Arc;

use crate::GreeterResult;

/// Platform Abstraction Layer (PAL) trait providing access to the standard streams.
///
/// Two implementations are provided:
/// - `RealPal`: writes to the process's stdout
/// - `MockPal`: in-memory implementation for testing
pub trait Pal: std::fmt::Debug + Send + Sync + 'static {
    /// Write `text` to standard output as a single write, then flush.
    fn write_stdout(&self, text: &str) -> GreeterResult<()>;
}

/* 📖 # Why use Arc<dyn Pal> with PalHandle?

The Greeter owns a handle rather than a generic parameter, so it stays a plain concrete type.
Arc makes the handle cheap to clone, and Deref gives direct access to the Pal methods.
*/

/// Handle to a PAL implementation, enabling shared ownership.
///
/// # Examples
///
/// ```no_run
/// use greeter_base::{PalHandle, RealPal};
///
/// let pal = PalHandle::new(RealPal::new());
/// pal.write_stdout("Hello, World!\n").unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct PalHandle(Arc<dyn Pal>);

impl PalHandle {
    /// Create a new PalHandle from a Pal implementation.
    pub fn new(pal: impl Pal + 'static) -> Self {
        Self(Arc::new(pal))
    }
}

impl std::ops::Deref for PalHandle {
    type Target = dyn Pal;

    fn deref(&self) -> &Self::Target {
        &*self.0
    }
}
