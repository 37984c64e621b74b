use crate::ssl::enums::certificate_error::CertificateError;
use crate::ssl::ssl::{check_regular_file, read_certificates, read_private_key};
use crate::ssl::structs::certificate_material::CertificateMaterial;
use crate::ssl::structs::leaf_metadata::LeafMetadata;
use log::{debug, warn};
use rustls::sign::CertifiedKey;
use std::sync::Arc;

impl std::fmt::Debug for CertificateMaterial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CertificateMaterial")
            .field("certs_count", &self.certs.len())
            .field("subject", &self.leaf.subject)
            .field("not_after", &self.leaf.not_after)
            .field("cert_path", &self.cert_path)
            .field("key_path", &self.key_path)
            .field("loaded_at", &self.loaded_at)
            .finish()
    }
}

impl CertificateMaterial {
    /// Loads and validates a PEM certificate chain and private key.
    ///
    /// Checks run in order: both paths must be regular files, the chain and
    /// key must parse and belong together, and the leaf must be inside its
    /// validity window. Material expiring within `expiry_warning_days` is
    /// still returned, with a warning logged.
    pub fn load(
        cert_path: &str,
        key_path: &str,
        expiry_warning_days: i64,
    ) -> Result<Self, CertificateError> {
        check_regular_file(cert_path)?;
        check_regular_file(key_path)?;

        let certs = read_certificates(cert_path)?;
        let key = read_private_key(key_path)?;
        let leaf = LeafMetadata::parse(&certs[0])?;

        let signing_key = rustls::crypto::ring::sign::any_supported_type(&key)
            .map_err(|e| CertificateError::ParseError(format!("{}: unsupported private key: {}", key_path, e)))?;
        let certified_key = CertifiedKey::new(certs.clone(), signing_key);
        match certified_key.keys_match() {
            // Unknown: the signing key cannot expose its public half; nothing to compare.
            Ok(()) | Err(rustls::Error::InconsistentKeys(rustls::InconsistentKeys::Unknown)) => {}
            Err(e) => {
                return Err(CertificateError::ParseError(format!(
                    "{} does not match {}: {}",
                    key_path, cert_path, e
                )));
            }
        }

        let now = chrono::Utc::now();
        leaf.check_validity(now)?;

        let days_left = leaf.days_until_expiry(now);
        if days_left <= expiry_warning_days {
            warn!(
                "[CERTIFICATE] {} ({}) expires in {} days at {}",
                cert_path, leaf.subject, days_left, leaf.not_after
            );
        } else {
            debug!(
                "[CERTIFICATE] {} ({}) valid for {} more days",
                cert_path, leaf.subject, days_left
            );
        }

        Ok(Self {
            certs,
            certified_key: Arc::new(certified_key),
            leaf,
            loaded_at: now,
            cert_path: cert_path.to_string(),
            key_path: key_path.to_string(),
        })
    }

    pub fn subject(&self) -> &str {
        &self.leaf.subject
    }
}
