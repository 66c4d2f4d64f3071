//! Optional `tracing` subscriber setup for hosts without their own
//!
//! The library only emits events; a host that already installs a subscriber
//! should not call this. The filter comes from the argument, never from the
//! environment.

use tracing_subscriber::{fmt, EnvFilter};

use crate::error::{Result, RiskError};

/// Default filter: analysis summaries only
pub const DEFAULT_DIRECTIVE: &str = "fundrisk=info";

/// Install a formatted stderr subscriber filtered by `directive`
///
/// `directive` uses `EnvFilter` syntax, e.g. `"fundrisk=debug"`. Calling it
/// again after a subscriber is installed is a no-op.
pub fn init_logging(directive: &str) -> Result<()> {
    let filter = EnvFilter::try_new(directive)
        .map_err(|e| RiskError::invalid_parameter("log_directive", e.to_string()))?;

    if fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init()
        .is_ok()
    {
        tracing::info!(directive, "logging initialised");
    }
    Ok(())
}
