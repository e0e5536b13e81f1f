//! Tracing initialization.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Install a stderr subscriber with the given default filter.
///
/// `RUST_LOG` overrides `default_filter` when set. Logs go to stderr so
/// they never mix with the diagnostic dump on stdout. Calling this more
/// than once is harmless; later calls leave the first subscriber in place
/// and return `false`.
///
/// # Example
///
/// ```rust
/// use credenv::init_tracing;
///
/// init_tracing("credenv=debug,warn");
/// ```
pub fn init_tracing(default_filter: &str) -> bool {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(filter)
        .try_init()
        .is_ok()
}

/// Default filter for a verbosity count (`-v`, `-vv`).
pub fn default_filter(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "credenv=warn",
        1 => "credenv=debug",
        _ => "credenv=trace",
    }
}
