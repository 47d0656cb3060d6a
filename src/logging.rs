//! Logging initialization for the layout dump tool.
//!
//! Configures the `tracing` subscriber with level filtering via the
//! `DQM_LAYOUTS_LOG` environment variable. Falls back to `info` level when
//! the variable is unset.
//!
//! # Usage
//!
//! ```bash
//! # Default (info level)
//! dqm-layouts list
//!
//! # Debug level (logs each key as it is registered)
//! DQM_LAYOUTS_LOG=debug dqm-layouts dump
//! ```

use tracing_subscriber::{fmt, EnvFilter};

/// Initialize the tracing subscriber.
///
/// Reads the `DQM_LAYOUTS_LOG` environment variable for filter directives.
/// Falls back to `info` level when the variable is unset or invalid.
/// Output goes to stderr so that JSON dumps on stdout stay machine-readable.
///
/// # Panics
///
/// Panics if a global subscriber has already been set (should only be
/// called once, at startup).
pub fn init() {
    let filter = EnvFilter::try_from_env("DQM_LAYOUTS_LOG")
        .unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
