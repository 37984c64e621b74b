use crate::ssl::structs::certificate_material::CertificateMaterial;
use parking_lot::RwLock;
use std::sync::Arc;
use std::sync::atomic::AtomicU64;

pub struct CertificateStore {
    pub(crate) current: RwLock<Option<Arc<CertificateMaterial>>>,
    pub(crate) generation: AtomicU64,
}
