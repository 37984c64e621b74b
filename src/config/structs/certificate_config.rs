use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CertificateConfig {
    pub cert_file: String,
    pub key_file: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ca_file: Option<String>,
    /// Seconds between monitor ticks.
    pub check_interval: u64,
    #[serde(default = "default_expiry_warning_days")]
    pub expiry_warning_days: i64,
}

fn default_expiry_warning_days() -> i64 {
    crate::ssl::impls::manager_options::DEFAULT_EXPIRY_WARNING_DAYS
}
