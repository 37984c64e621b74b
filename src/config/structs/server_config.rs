use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub enabled: bool,
    pub bind_address: String,
    pub threads: Option<u64>,
}
