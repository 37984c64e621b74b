use crate::ssl::structs::certificate_material::CertificateMaterial;
use crate::ssl::structs::certificate_store::CertificateStore;
use parking_lot::RwLock;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

impl std::fmt::Debug for CertificateStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let current = self.current.read();
        f.debug_struct("CertificateStore")
            .field("loaded", &current.is_some())
            .field("subject", &current.as_ref().map(|material| material.subject().to_string()))
            .field("generation", &self.generation.load(Ordering::Acquire))
            .finish()
    }
}

impl Default for CertificateStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CertificateStore {
    pub fn new() -> Self {
        Self {
            current: RwLock::new(None),
            generation: AtomicU64::new(0),
        }
    }

    /// Current material, if any. Readers only hold the lock long enough to
    /// clone the `Arc`, so a slow reload never blocks them.
    pub fn get_current(&self) -> Option<Arc<CertificateMaterial>> {
        self.current.read().clone()
    }

    /// Publishes `material` and returns the material it replaced.
    pub fn swap(&self, material: Arc<CertificateMaterial>) -> Option<Arc<CertificateMaterial>> {
        let mut current = self.current.write();
        let previous = current.replace(material);
        self.generation.fetch_add(1, Ordering::AcqRel);
        previous
    }

    pub fn is_loaded(&self) -> bool {
        self.current.read().is_some()
    }

    /// Number of swaps performed so far; never decreases.
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::Acquire)
    }
}
