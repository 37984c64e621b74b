//! Implementation blocks for metrics types.

pub mod certificate_stats;
pub mod expiry_reporter;
pub mod monitoring_error_type;
pub mod reload_status;
