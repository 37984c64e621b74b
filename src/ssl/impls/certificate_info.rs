use crate::ssl::structs::certificate_info::CertificateInfo;
use crate::ssl::structs::certificate_material::CertificateMaterial;
use crate::ssl::structs::leaf_metadata::LeafMetadata;
use chrono::{DateTime, Utc};

impl CertificateInfo {
    pub fn from_leaf(cert_file: &str, leaf: &LeafMetadata, now: DateTime<Utc>) -> Self {
        Self {
            cert_file: cert_file.to_string(),
            subject: leaf.subject.clone(),
            issuer: leaf.issuer.clone(),
            serial: leaf.serial.clone(),
            not_before: leaf.not_before,
            not_after: leaf.not_after,
            dns_names: leaf.dns_names.clone(),
            ip_addresses: leaf.ip_addresses.clone(),
            is_expired: leaf.is_expired(now),
            is_valid: leaf.is_valid(now),
            days_until_expiry: leaf.days_until_expiry(now),
        }
    }

    pub fn from_material(material: &CertificateMaterial, now: DateTime<Utc>) -> Self {
        Self::from_leaf(&material.cert_path, &material.leaf, now)
    }
}
