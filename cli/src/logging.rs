//! # Logging
//!
//! Sets up the `tracing` subscriber for the CLI.
//!
//! Output goes to stderr so stdout only carries the confirmation line.
//! `RUST_LOG` overrides the default filter, e.g. `RUST_LOG=dbusmgr_patch_core=debug`.

use std::sync::Once;
use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Filter used when `RUST_LOG` is unset or unparsable.
pub const DEFAULT_FILTER: &str = "warn";

/// Builds the filter from `RUST_LOG`, falling back to [`DEFAULT_FILTER`].
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Installs the global subscriber. Later calls are ignored.
pub fn init() {
    INIT.call_once(|| {
        // A subscriber set elsewhere (e.g. by a test harness) wins.
        let _ = tracing_subscriber::fmt()
            .with_env_filter(env_filter())
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_is_idempotent() {
        init();
        init();
    }
}
