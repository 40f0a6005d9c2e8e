/* 📖 # Why have greeter_base as a separate library?
greeter_base holds the error type, the tracing setup and the platform abstraction layer.
The engine and the CLI both depend on it, so neither has to reach for std::io directly.
*/

pub mod error;
pub mod pal;
pub mod tracing;

// Re-export commonly used types for convenience
pub use error::{ErrorKind, GreeterError, GreeterResult, ResultExt};
pub use pal::{MockPal, Pal, PalHandle, RealPal};
