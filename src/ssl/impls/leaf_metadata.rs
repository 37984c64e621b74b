use crate::ssl::enums::certificate_error::CertificateError;
use crate::ssl::structs::leaf_metadata::LeafMetadata;
use chrono::{DateTime, Utc};
use rustls::pki_types::CertificateDer;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use x509_parser::extensions::GeneralName;

const SECONDS_PER_DAY: i64 = 86_400;

impl LeafMetadata {
    pub fn parse(der: &CertificateDer<'_>) -> Result<Self, CertificateError> {
        let (_, cert) = x509_parser::parse_x509_certificate(der.as_ref())
            .map_err(|e| CertificateError::ParseError(format!("invalid X.509 certificate: {}", e)))?;

        let validity = cert.validity();
        let not_before = timestamp_to_utc(validity.not_before.timestamp())?;
        let not_after = timestamp_to_utc(validity.not_after.timestamp())?;

        let mut dns_names = Vec::new();
        let mut ip_addresses = Vec::new();
        if let Ok(Some(san)) = cert.subject_alternative_name() {
            for name in san.value.general_names.iter() {
                match name {
                    GeneralName::DNSName(dns) => dns_names.push(dns.to_string()),
                    GeneralName::IPAddress(bytes) => {
                        if let Some(ip) = ip_from_bytes(bytes) {
                            ip_addresses.push(ip);
                        }
                    }
                    _ => {}
                }
            }
        }

        let common_name = cert
            .subject()
            .iter_common_name()
            .next()
            .and_then(|cn| cn.as_str().ok())
            .map(str::to_string);

        Ok(Self {
            subject: cert.subject().to_string(),
            issuer: cert.issuer().to_string(),
            common_name,
            serial: cert.raw_serial_as_string(),
            not_before,
            not_after,
            dns_names,
            ip_addresses,
        })
    }

    pub fn check_validity(&self, now: DateTime<Utc>) -> Result<(), CertificateError> {
        if now < self.not_before {
            return Err(CertificateError::NotYetValid {
                not_before: self.not_before,
            });
        }
        if now > self.not_after {
            return Err(CertificateError::Expired {
                not_after: self.not_after,
            });
        }
        Ok(())
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now > self.not_after
    }

    pub fn is_valid(&self, now: DateTime<Utc>) -> bool {
        self.check_validity(now).is_ok()
    }

    /// Whole days left until `not_after`, rounded towards negative infinity,
    /// so a certificate that expired an hour ago reports `-1`.
    pub fn days_until_expiry(&self, now: DateTime<Utc>) -> i64 {
        (self.not_after - now).num_seconds().div_euclid(SECONDS_PER_DAY)
    }
}
