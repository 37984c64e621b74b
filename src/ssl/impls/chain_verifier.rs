use crate::ssl::enums::certificate_error::CertificateError;
use crate::ssl::ssl::read_certificates;
use crate::ssl::structs::certificate_material::CertificateMaterial;
use crate::ssl::structs::chain_verifier::ChainVerifier;
use log::debug;
use rustls::RootCertStore;
use rustls::client::verify_server_cert_signed_by_trust_anchor;
use rustls::pki_types::UnixTime;
use rustls::server::ParsedCertificate;

impl ChainVerifier {
    pub fn new(ca_path: Option<String>) -> Self {
        Self { ca_path }
    }

    pub fn ca_path(&self) -> Option<&str> {
        self.ca_path.as_deref()
    }

    /// Verifies the material's chain up to a root from the CA bundle.
    ///
    /// Without a configured bundle this always succeeds. The bundle is read on
    /// every call so a rotated CA takes effect with the next reload.
    pub fn verify(&self, material: &CertificateMaterial) -> Result<(), CertificateError> {
        let Some(ca_path) = &self.ca_path else {
            return Ok(());
        };

        let roots = Self::load_roots(ca_path)?;
        let (end_entity, intermediates) = material
            .certs
            .split_first()
            .ok_or_else(|| CertificateError::ChainInvalid("empty certificate chain".to_string()))?;
        let leaf = ParsedCertificate::try_from(end_entity)
            .map_err(|e| CertificateError::ChainInvalid(e.to_string()))?;

        // Path building only; the leaf's names are the client's concern.
        let provider = rustls::crypto::ring::default_provider();
        verify_server_cert_signed_by_trust_anchor(
            &leaf,
            &roots,
            intermediates,
            UnixTime::now(),
            provider.signature_verification_algorithms.all,
        )
            .map_err(|e| CertificateError::ChainInvalid(e.to_string()))?;

        debug!(
            "[CHAIN] {} verified against {}",
            material.cert_path, ca_path
        );
        Ok(())
    }

    fn load_roots(ca_path: &str) -> Result<RootCertStore, CertificateError> {
        let ca_certs = read_certificates(ca_path)
            .map_err(|e| CertificateError::ChainInvalid(format!("CA bundle unusable: {}", e)))?;
        let mut roots = RootCertStore::empty();
        for cert in ca_certs {
            roots
                .add(cert)
                .map_err(|e| CertificateError::ChainInvalid(format!("{}: {}", ca_path, e)))?;
        }
        Ok(roots)
    }
}
