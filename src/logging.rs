//! Diagnostic logging setup
//!
//! Logs go to stderr so stdout stays usable in pipelines. `RUST_LOG` takes
//! precedence over the `--verbose` flag.

use tracing_subscriber::EnvFilter;

/// Install the global subscriber. Calling it twice is harmless.
pub fn init(verbose: bool) {
    let default_filter = if verbose { "transync=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
