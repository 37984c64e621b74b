//! Certificate health metrics.
//!
//! The certificate manager reports through the [`traits::metrics_sink::MetricsSink`]
//! trait so the hosting process can plug in its own registry. The bundled
//! [`structs::certificate_stats::CertificateStats`] keeps every series in
//! memory and renders the Prometheus text format for the `/metrics` endpoint.
//!
//! # Series
//!
//! - `certificate_expiry_days{cert_file,subject,issuer}`
//! - `certificate_valid{cert_file,subject}`
//! - `certificate_reloads_total{cert_file,status}`
//! - `certificate_monitoring_errors_total{cert_file,error_type}`
//!
//! # Example
//!
//! ```rust,ignore
//! use hotcert::stats::structs::certificate_stats::CertificateStats;
//!
//! let stats = Arc::new(CertificateStats::new());
//! let body = stats.render_prometheus();
//! ```

/// Metric label enumerations.
pub mod enums;

/// Implementation blocks for metrics types.
pub mod impls;

/// Metrics data structures.
pub mod structs;

/// Metrics collaborator trait.
pub mod traits;
