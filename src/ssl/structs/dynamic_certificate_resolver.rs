use crate::ssl::structs::certificate_manager::CertificateManager;
use std::sync::Arc;

pub struct DynamicCertificateResolver {
    pub(crate) manager: Arc<CertificateManager>,
}
