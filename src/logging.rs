//! Log output setup
//!
//! Diagnostics go to stderr through `tracing`; reports are printed by the
//! presentation layer on stdout.

use tracing_subscriber::EnvFilter;

/// Environment variable overriding the log filter
pub const LOG_ENV: &str = "DEPLOCK_LOG";

/// Filter directive for a `-v` count
pub fn default_directive(verbose: u8) -> &'static str {
    match verbose {
        0 => "deplock=info",
        1 => "deplock=debug",
        _ => "deplock=trace",
    }
}

/// Install the global subscriber; later calls are no-ops
pub fn init(verbose: u8) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
