//! system-pulse: a real-time desktop monitor for CPU, memory, disk,
//! network and battery with 60-second rolling charts.
//!
//! Run with:  `RUST_LOG=info system-pulse`

use anyhow::Result;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Structured logging; RUST_LOG controls verbosity (default: info).
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!("system-pulse v{} starting", env!("CARGO_PKG_VERSION"));

    pulse_window::run().map_err(Into::into)
}
