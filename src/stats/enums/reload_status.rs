use serde::{Deserialize, Serialize};

/// Outcome label of a certificate reload attempt.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ReloadStatus {
    Success,
    Error,
}
