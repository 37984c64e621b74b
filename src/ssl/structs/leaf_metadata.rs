use chrono::{DateTime, Utc};
use std::net::IpAddr;

/// Identity and validity window of a leaf certificate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeafMetadata {
    pub subject: String,
    pub issuer: String,
    pub common_name: Option<String>,
    pub serial: String,
    pub not_before: DateTime<Utc>,
    pub not_after: DateTime<Utc>,
    pub dns_names: Vec<String>,
    pub ip_addresses: Vec<IpAddr>,
}
