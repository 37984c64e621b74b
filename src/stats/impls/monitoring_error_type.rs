use crate::stats::enums::monitoring_error_type::MonitoringErrorType;

impl MonitoringErrorType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MonitoringErrorType::FileAccess => "file_access",
            MonitoringErrorType::Parse => "parse",
            MonitoringErrorType::ExpiryCheck => "expiry_check",
            MonitoringErrorType::Chain => "chain",
        }
    }
}

impl std::fmt::Display for MonitoringErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
