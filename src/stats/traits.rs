//! Metrics collaborator trait.

/// Sink receiving certificate gauges and counters.
pub mod metrics_sink;
