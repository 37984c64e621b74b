use crate::ssl::structs::leaf_metadata::LeafMetadata;
use rustls::pki_types::CertificateDer;
use rustls::sign::CertifiedKey;
use std::sync::Arc;

/// A validated certificate chain and private key ready for TLS handshakes.
///
/// Material is only ever shared behind an `Arc` and is never mutated after
/// construction, so a reader always sees the chain, key and metadata of a
/// single generation.
pub struct CertificateMaterial {
    pub certs: Vec<CertificateDer<'static>>,
    pub certified_key: Arc<CertifiedKey>,
    pub leaf: LeafMetadata,
    pub loaded_at: chrono::DateTime<chrono::Utc>,
    pub cert_path: String,
    pub key_path: String,
}
