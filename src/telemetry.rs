//! Telemetry helpers for applications embedding `chart-data`.
//!
//! The crate only emits `tracing` events (geometry replacement, paint passes,
//! rejected height designations). Installing a subscriber is left to the host
//! unless it opts into the `telemetry` feature and calls
//! `init_default_tracing`.

/// Installs a compact, env-filtered `tracing` subscriber.
///
/// The filter is read from `RUST_LOG` and falls back to `warn`, which keeps
/// per-frame `trace!` paint events quiet by default.
///
/// Returns `false` when the `telemetry` feature is disabled or when the host
/// already installed a global subscriber.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
