use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CertificatePaths {
    pub cert_path: String,
    pub key_path: String,
    pub ca_path: Option<String>,
}
