//! Metrics data structures.

/// In-memory metrics sink with Prometheus text exposition.
pub mod certificate_stats;

/// Adapter publishing certificate health for one certificate file.
pub mod expiry_reporter;
