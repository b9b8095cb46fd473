//! Diagnostic logging setup.
//!
//! Library code emits `tracing` events; the binary installs a stderr
//! subscriber filtered by `PWDMANAGER_LOG` (e.g. `PWDMANAGER_LOG=debug`).
//! User-facing messages do not go through here, see `cli::output`.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the filter directive.
pub const LOG_ENV: &str = "PWDMANAGER_LOG";

/// Filter used when `PWDMANAGER_LOG` is unset or invalid.
const DEFAULT_FILTER: &str = "error";

/// Install the global subscriber.  Safe to call more than once.
pub fn init() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
