//! HTTPS status API served with the managed certificate.
//!
//! The listener resolves its TLS identity through
//! [`crate::ssl::structs::dynamic_certificate_resolver::DynamicCertificateResolver`],
//! so every handshake uses whatever certificate the manager currently holds.
//!
//! # Endpoints
//!
//! - `GET /metrics` - Prometheus-format certificate metrics
//! - `GET /api/certificate` - Active certificate details
//! - `GET /api/certificate/disk` - Details of the certificate currently on disk
//! - `POST /api/certificate/reload` - Force a reload from disk

/// Data structures for API service context.
pub mod structs;

/// Core API service functions and route configuration.
#[allow(clippy::module_inception)]
pub mod api;

/// Certificate status and reload endpoints.
pub mod api_certificate;

/// Metrics endpoint.
pub mod api_stats;
