use std::io::IsTerminal;

use crate::GreeterResult;
pub use tracing::instrument;
pub use tracing::level_filters::LevelFilter;
pub use tracing::{debug, error, info, trace, warn};
use tracing_error::ErrorLayer;
use tracing_subscriber::Layer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/* 📖 # Why does tracing write to stderr with a fixed level?

Stdout carries the greeting and nothing else, so log lines must never land there.
The program reads no environment variables, so the level comes from TracingConfig rather than RUST_LOG.
Colors are only used when stderr is a terminal, so redirected logs stay plain text.
*/

/// Logging settings for the process.
#[derive(Debug, Clone)]
pub struct TracingConfig {
    /// Most verbose level written to stderr.
    pub level: LevelFilter,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            level: LevelFilter::WARN,
        }
    }
}

/// Installs the global subscriber: a stderr fmt layer filtered to `config.level`, plus an
/// unfiltered ErrorLayer so errors capture span traces.
pub fn init_tracing(config: &TracingConfig) -> GreeterResult<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal())
                .with_filter(config.level),
        )
        .with(ErrorLayer::default())
        .try_init()
        .map_err(|e| crate::err!("Failed to initialize tracing: {}", e))
}
