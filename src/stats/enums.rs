//! Metric label enumerations.

/// `status` label of `certificate_reloads_total`.
pub mod reload_status;

/// `error_type` label of `certificate_monitoring_errors_total`.
pub mod monitoring_error_type;
