//! Diagnostic logging to stderr.
//!
//! The filter comes from `NURSE_LOG` (e.g. `NURSE_LOG=nurse_assist=trace`);
//! without it only warnings are shown, or debug output with `--verbose`.

use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "NURSE_LOG";

pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        EnvFilter::new(if verbose { "nurse_assist=debug,warn" } else { "warn" })
    });

    // A second initialisation (e.g. from tests) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
