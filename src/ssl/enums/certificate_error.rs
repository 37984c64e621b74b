use thiserror::Error;

#[derive(Debug, Error)]
pub enum CertificateError {
    #[error("File not found: {0}")]
    FileNotFound(String),
    #[error("Path is a directory, not a file: {0}")]
    IsDirectory(String),
    #[error("Permission denied: {0}")]
    PermissionDenied(String),
    #[error("Failed to access file: {0}")]
    FileAccess(String),
    #[error("Failed to parse certificate material: {0}")]
    ParseError(String),
    #[error("Certificate is not yet valid (valid from {not_before})")]
    NotYetValid {
        not_before: chrono::DateTime<chrono::Utc>,
    },
    #[error("Certificate has expired (expired at {not_after})")]
    Expired {
        not_after: chrono::DateTime<chrono::Utc>,
    },
    #[error("Certificate chain verification failed: {0}")]
    ChainInvalid(String),
    #[error("No certificate has been loaded yet")]
    NotLoaded,
    #[error("Monitoring interval must be greater than zero")]
    InvalidInterval,
    #[error("Monitoring has been stopped and cannot be restarted")]
    MonitorStopped,
    #[error("Monitoring requires a running Tokio runtime")]
    NoRuntime,
}
