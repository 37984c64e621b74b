use serde::{Deserialize, Serialize};

/// Category label of a failure observed while monitoring a certificate.
///
/// - `FileAccess` - missing, unreadable or wrongly typed files
/// - `Parse` - malformed PEM/DER or a key that does not match the certificate
/// - `ExpiryCheck` - validity window violations or failed expiry evaluation
/// - `Chain` - CA bundle or chain verification failures
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MonitoringErrorType {
    FileAccess,
    Parse,
    ExpiryCheck,
    Chain,
}
