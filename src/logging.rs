//! Diagnostic logging setup.
//!
//! Logs go to stderr so stdout carries only the report.

use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Map the `-v` count to a default log level.
pub fn level_for(verbose: u8) -> Level {
    match verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Install the global tracing subscriber. `RUST_LOG` takes precedence over `-v`.
pub fn init_tracing(verbose: u8) {
    let level = level_for(verbose);
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("axocheck={}", level).into());

    // A second init (e.g. in tests) is not an error worth surfacing.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
