use crate::ssl::enums::certificate_error::CertificateError;
use crate::ssl::structs::certificate_info::CertificateInfo;
use crate::stats::enums::monitoring_error_type::MonitoringErrorType;
use crate::stats::enums::reload_status::ReloadStatus;
use crate::stats::structs::expiry_reporter::ExpiryReporter;
use crate::stats::traits::metrics_sink::MetricsSink;
use std::sync::Arc;

impl std::fmt::Debug for ExpiryReporter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExpiryReporter")
            .field("cert_file", &self.cert_file)
            .finish()
    }
}

impl ExpiryReporter {
    pub fn new(cert_file: &str, sink: Arc<dyn MetricsSink>) -> Self {
        Self {
            cert_file: cert_file.to_string(),
            sink,
        }
    }

    pub fn cert_file(&self) -> &str {
        &self.cert_file
    }

    pub fn report(&self, info: &CertificateInfo) {
        self.sink.set_expiry_days(
            &self.cert_file,
            &info.subject,
            &info.issuer,
            info.days_until_expiry as f64,
        );
        self.sink.set_valid(&self.cert_file, &info.subject, info.is_valid);
    }

    pub fn record_reload(&self, status: ReloadStatus) {
        self.sink.inc_reload(&self.cert_file, status);
    }

    pub fn record_error(&self, error: &CertificateError) {
        if let Some(error_type) = error.error_type() {
            self.record_error_type(error_type);
        }
    }

    pub fn record_error_type(&self, error_type: MonitoringErrorType) {
        self.sink.inc_monitoring_error(&self.cert_file, error_type);
    }
}
