use std::error::Error as StdError;
use std::fmt;
use std::io;

use tracing_error::{SpanTrace, SpanTraceStatus};

/* 📖 # Why a custom error type and not anyhow/thiserror?

The program has exactly one thing that can go wrong at runtime (writing to a standard stream),
so a small hand-written type is enough. It still carries context and a span trace so
that a failure reported on stderr says where it happened.
 */

/// Error variants that can occur in greeter operations.
#[derive(Debug)]
pub enum ErrorKind {
    /// Writing to a standard stream failed
    OutputError {
        stream: &'static str,
        source: io::Error,
    },

    /// Catch-all for other errors with a message
    Message { message: String },
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::OutputError { stream, source } => {
                write!(f, "Failed to write to {}: {}", stream, source)
            }
            ErrorKind::Message { message } => write!(f, "{}", message),
        }
    }
}

/* 📖 # Why separate ErrorKind and GreeterError?
ErrorKind is what went wrong and can be matched on.
GreeterError adds what the caller was doing at the time (context strings) and the span trace
captured when the error was created.
*/

/// Error wrapping an [`ErrorKind`] with context and a span trace.
pub struct GreeterError {
    kind: ErrorKind,
    context: Vec<String>,
    span_trace: SpanTrace,
}

/// Standard result type for greeter operations.
///
/// The error is boxed to keep the `Ok` path small.
pub type GreeterResult<T> = std::result::Result<T, Box<GreeterError>>;

impl GreeterError {
    /// Creates a new error from an ErrorKind, capturing the current span trace.
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: vec![],
            span_trace: SpanTrace::capture(),
        }
    }

    /// Shorthand for an [`ErrorKind::Message`] error.
    pub fn message(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Message {
            message: message.into(),
        })
    }

    /// Creates an [`ErrorKind::OutputError`] for the named stream.
    pub fn output(stream: &'static str, source: io::Error) -> Self {
        Self::new(ErrorKind::OutputError { stream, source })
    }

    /// Attaches context to an error.
    pub fn context(mut self, context: impl Into<String>) -> Self {
        self.context.push(context.into());
        self
    }

    /// Attaches context using lazy evaluation.
    pub fn with_context<F>(mut self, f: F) -> Self
    where
        F: FnOnce() -> String,
    {
        self.context.push(f());
        self
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }
}

impl From<ErrorKind> for GreeterError {
    fn from(kind: ErrorKind) -> Self {
        Self::new(kind)
    }
}

impl StdError for GreeterError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match &self.kind {
            ErrorKind::OutputError { source, .. } => Some(source),
            ErrorKind::Message { .. } => None,
        }
    }
}

impl fmt::Display for GreeterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for ctx in &self.context {
            write!(f, "{}: ", ctx)?;
        }
        write!(f, "{}", self.kind)
    }
}

/* 📖 # Why a custom Debug impl?
`main` logs errors with `{:?}`. The derived output would dump the io::Error internals and the
raw span trace; the tree below reads top-down: what failed, what we were doing, and where in
the span hierarchy it happened.
*/
impl fmt::Debug for GreeterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.kind)?;
        for (i, ctx) in self.context.iter().enumerate() {
            let connector = if i + 1 == self.context.len() { "└─" } else { "├─" };
            writeln!(f, "{} {}", connector, ctx)?;
        }
        if self.span_trace.status() == SpanTraceStatus::CAPTURED {
            writeln!(f, "Trace: {}", self.span_trace)?;
        }
        Ok(())
    }
}

/// Builds a boxed [`GreeterError`] message from format arguments.
#[macro_export]
macro_rules! err {
    ($($arg:tt)*) => {
        Box::new($crate::GreeterError::message(format!($($arg)*)))
    };
}

/// Extension trait for attaching context to Results during propagation.
pub trait ResultExt<T> {
    /// Attaches context to an error. Eager evaluation.
    fn context(self, context: impl Into<String>) -> GreeterResult<T>;

    /// Attaches context, only evaluated if the result is an error.
    fn with_context<F>(self, f: F) -> GreeterResult<T>
    where
        F: FnOnce() -> String;
}

impl<T> ResultExt<T> for GreeterResult<T> {
    fn context(self, context: impl Into<String>) -> GreeterResult<T> {
        self.map_err(|err| Box::new(err.context(context)))
    }

    fn with_context<F>(self, f: F) -> GreeterResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|err| Box::new(err.with_context(f)))
    }
}
