//! Diagnostic logging.
//!
//! The library only emits `tracing` events; installing a subscriber is up to
//! the client. [`init`] is the one the CLI uses: human-readable lines on
//! stderr, filtered by `SNIPZ_LOG` (an `EnvFilter` directive), falling back to
//! warnings only, or debug output for snipz when `verbose` is set.

use std::sync::Once;
use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "SNIPZ_LOG";

static INIT_ONCE: Once = Once::new();

fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "snipz=debug"
    } else {
        "snipz=warn"
    }
}

/// Install the stderr subscriber. Later calls do nothing.
pub fn init(verbose: bool) {
    INIT_ONCE.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV)
            .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    });
}
