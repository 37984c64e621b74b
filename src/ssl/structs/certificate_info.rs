use chrono::{DateTime, Utc};
use serde::Serialize;
use std::net::IpAddr;

/// Read-only snapshot of a certificate's identity and health.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CertificateInfo {
    pub cert_file: String,
    pub subject: String,
    pub issuer: String,
    pub serial: String,
    pub not_before: DateTime<Utc>,
    pub not_after: DateTime<Utc>,
    pub dns_names: Vec<String>,
    pub ip_addresses: Vec<IpAddr>,
    pub is_expired: bool,
    pub is_valid: bool,
    pub days_until_expiry: i64,
}
