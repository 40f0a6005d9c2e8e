/* 📖 # What is the Platform Abstraction Layer?

The PAL is the only place that touches the process's standard streams.
RealPal writes to the real stdout; MockPal records writes in memory so greeting output can be
asserted exactly in unit tests.
*/

pub mod mock;
pub mod real_pal;
mod traits;

pub use mock::MockPal;
pub use real_pal::RealPal;
pub use traits::{Pal, PalHandle};
