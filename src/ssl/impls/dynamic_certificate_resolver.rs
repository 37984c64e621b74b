use crate::ssl::structs::certificate_manager::CertificateManager;
use crate::ssl::structs::dynamic_certificate_resolver::DynamicCertificateResolver;
use rustls::server::ResolvesServerCert;
use rustls::sign::CertifiedKey;
use std::sync::Arc;

impl std::fmt::Debug for DynamicCertificateResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DynamicCertificateResolver")
            .field("cert_path", &self.manager.paths().cert_path)
            .field("has_certificate", &self.has_certificate())
            .finish()
    }
}

impl DynamicCertificateResolver {
    pub fn new(manager: Arc<CertificateManager>) -> Self {
        Self { manager }
    }

    pub fn has_certificate(&self) -> bool {
        self.manager.get_current_certificate().is_some()
    }

    /// Key handed to the next handshake.
    pub fn current_key(&self) -> Option<Arc<CertifiedKey>> {
        self.manager
            .get_current_certificate()
            .map(|material| Arc::clone(&material.certified_key))
    }
}

impl ResolvesServerCert for DynamicCertificateResolver {
    fn resolve(&self, _client_hello: rustls::server::ClientHello<'_>) -> Option<Arc<CertifiedKey>> {
        self.current_key()
    }
}
