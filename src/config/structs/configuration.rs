use serde::{Deserialize, Serialize};
use crate::config::structs::certificate_config::CertificateConfig;
use crate::config::structs::server_config::ServerConfig;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Configuration {
    pub log_level: String,
    pub certificate: CertificateConfig,
    pub server: ServerConfig,
}
