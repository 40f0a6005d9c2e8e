pub mod greeter;

pub use greeter::{DEFAULT_NAME, GREETING_PREFIX, GREETING_SUFFIX, Greeter, format_greeting};
