use crate::ssl::enums::certificate_error::CertificateError;
use crate::stats::enums::monitoring_error_type::MonitoringErrorType;

impl CertificateError {
    /// Monitoring category of this error, or `None` for manager lifecycle misuse.
    pub fn error_type(&self) -> Option<MonitoringErrorType> {
        match self {
            CertificateError::FileNotFound(_)
            | CertificateError::IsDirectory(_)
            | CertificateError::PermissionDenied(_)
            | CertificateError::FileAccess(_) => Some(MonitoringErrorType::FileAccess),
            CertificateError::ParseError(_) => Some(MonitoringErrorType::Parse),
            CertificateError::NotYetValid { .. }
            | CertificateError::Expired { .. }
            | CertificateError::NotLoaded => Some(MonitoringErrorType::ExpiryCheck),
            CertificateError::ChainInvalid(_) => Some(MonitoringErrorType::Chain),
            CertificateError::InvalidInterval
            | CertificateError::MonitorStopped
            | CertificateError::NoRuntime => None,
        }
    }
}
