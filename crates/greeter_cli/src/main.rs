/* 📖 # Why does the CLI take no arguments?

The binary greets "World" and exits. It reads no arguments, flags or environment variables,
so running `greeter` always prints the same single line.

Exit codes:
- 0: Success (greeting written)
- 1: Error (tracing could not be set up, or stdout could not be written)
*/

use std::process;

use greeter_base::tracing::{TracingConfig, error, init_tracing};
use greeter_base::{PalHandle, RealPal};
use greeter_engine::{DEFAULT_NAME, Greeter};

fn main() {
    if let Err(e) = init_tracing(&TracingConfig::default()) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }

    let greeter = Greeter::new(PalHandle::new(RealPal::new()));

    if let Err(e) = greeter.greet(DEFAULT_NAME) {
        error!("{:?}", e);
        process::exit(1);
    }
}
