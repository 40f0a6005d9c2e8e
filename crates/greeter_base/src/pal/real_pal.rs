use std::io::{self, Write};

use tracing::{debug, instrument};

use crate::{GreeterError, GreeterResult};

use super::traits::Pal;

/// PAL implementation backed by the real process streams.
#[derive(Debug, Default)]
pub struct RealPal;

impl RealPal {
    pub fn new() -> Self {
        Self
    }
}

fn write_and_flush(out: &mut impl Write, text: &str) -> io::Result<()> {
    out.write_all(text.as_bytes())?;
    out.flush()
}

impl Pal for RealPal {
    #[instrument(skip(self, text), fields(bytes = text.len()))]
    fn write_stdout(&self, text: &str) -> GreeterResult<()> {
        let mut stdout = io::stdout().lock();
        write_and_flush(&mut stdout, text).map_err(|source| {
            debug!(error = %source, "stdout write failed");
            Box::new(GreeterError::output("stdout", source))
        })?;
        debug!("wrote to stdout");
        Ok(())
    }
}
