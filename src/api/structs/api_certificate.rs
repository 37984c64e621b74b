use crate::ssl::structs::certificate_info::CertificateInfo;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct CertificateStatusResponse {
    pub status: &'static str,
    pub generation: u64,
    pub loaded_at: Option<String>,
    pub certificate: CertificateInfo,
}

#[derive(Debug, Serialize)]
pub struct CertificateReloadResponse {
    pub status: &'static str,
    pub generation: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub certificate: Option<CertificateInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
