//! Log subscriber setup for the command-line tool

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::io::configuration::{DEFAULT_LOG_FILTER, QUIET_LOG_FILTER};

/// Filter used when `RUST_LOG` is not set
pub const fn default_filter(quiet: bool) -> &'static str {
    if quiet {
        QUIET_LOG_FILTER
    } else {
        DEFAULT_LOG_FILTER
    }
}

/// Install a stderr fmt subscriber honouring `RUST_LOG`
///
/// Returns false if a global subscriber was already installed.
pub fn init(quiet: bool) -> bool {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter(quiet)));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()
        .is_ok()
}
