//! JSON fmt subscriber with an `EnvFilter`.
//!
//! Verbosity comes from `RUST_LOG` (default `info`); per-item rule decisions
//! are logged at `debug`.

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "info";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

pub fn init() -> bool {
    let filter = env_filter();
    let directives = filter.to_string();

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false)
        .try_init()
        .is_ok();

    if installed {
        tracing::info!(filter = %directives, "logging initialized");
    }
    installed
}
