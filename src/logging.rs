//! Diagnostic logging on stderr.
//!
//! Stdout is reserved for values printed by commands, so every log line goes to stderr.

use std::io;

use tracing_subscriber::EnvFilter;

use crate::config::LogLevel;

/// Install the global subscriber at `level`; `RUST_LOG` takes precedence when set.
///
/// Calling this twice is harmless: the second subscriber is dropped.
pub fn init_logging(level: LogLevel) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("releaser={}", level.as_str())));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
