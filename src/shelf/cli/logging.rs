//! Tracing setup for the binary.
//!
//! Events go to stderr so they never mix with the results file. The filter comes
//! from `SHELF_LOG` when set, then `--verbose`, then the config's `log_level`.

use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "SHELF_LOG";

/// Install the process-wide subscriber. Later calls are no-ops.
pub fn init(verbose: bool, config_level: &str) {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        let level = if verbose { "debug" } else { config_level };
        EnvFilter::new(level)
    });

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
