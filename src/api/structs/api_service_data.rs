//! Shared data context for API request handlers.

use crate::ssl::structs::certificate_manager::CertificateManager;
use crate::stats::structs::certificate_stats::CertificateStats;
use std::sync::Arc;

/// Shared application data available to all API request handlers.
///
/// Injected into Actix-web's application data; both fields are shared with
/// the monitor loop, so handlers always observe the live certificate.
#[derive(Debug)]
pub struct ApiServiceData {
    /// Manager owning the served certificate.
    pub certificate_manager: Arc<CertificateManager>,

    /// Metrics registry the manager reports into.
    pub certificate_stats: Arc<CertificateStats>,
}
