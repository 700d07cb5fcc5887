//! Telemetry helpers for applications embedding `range-view`.
//!
//! The engine emits `debug!` events for every committed view transition and
//! `warn!` events when input records are dropped or a brush is ignored.
//! Installing a subscriber stays the host's decision.

/// Filter used when `RUST_LOG` is unset: dataset warnings and engine info,
/// everything else at `warn`.
pub const DEFAULT_FILTER: &str = "warn,range_view=info";

/// Filter that additionally shows every view transition with its window
/// bounds and visible record count.
pub const TRANSITIONS_FILTER: &str = "warn,range_view=debug";

/// Initializes a compact `tracing` subscriber using `RUST_LOG`, falling back
/// to [`DEFAULT_FILTER`].
///
/// Returns `false` when the `telemetry` feature is disabled or the host
/// already installed a global subscriber.
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing_with_fallback(DEFAULT_FILTER)
}

/// Like [`init_default_tracing`], with a caller-supplied fallback filter such
/// as [`TRANSITIONS_FILTER`].
#[must_use]
pub fn init_tracing_with_fallback(fallback: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .or_else(|_| tracing_subscriber::EnvFilter::try_new(fallback));
        let Ok(filter) = filter else {
            return false;
        };
        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = fallback;
        false
    }
}
