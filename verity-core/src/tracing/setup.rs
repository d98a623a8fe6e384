//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Initialize the Verity tracing/logging system.
///
/// Reads the `VERITY_LOG` environment variable for per-subsystem log levels.
/// Format: `VERITY_LOG=confidence=debug,contradiction=info`
///
/// Falls back to `verity=info` if `VERITY_LOG` is not set or is invalid.
///
/// This function is idempotent — calling it multiple times is safe.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env("VERITY_LOG")
            .unwrap_or_else(|_| EnvFilter::new("verity=info"));

        tracing_subscriber::registry()
            .with(fmt::layer().with_target(true))
            .with(filter)
            .init();
    });
}
