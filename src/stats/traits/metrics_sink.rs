use crate::stats::enums::monitoring_error_type::MonitoringErrorType;
use crate::stats::enums::reload_status::ReloadStatus;

/// Destination for certificate health metrics.
///
/// Implementations must be cheap to call from the monitor loop and safe to
/// share between threads. The series are:
///
/// - `certificate_expiry_days{cert_file,subject,issuer}` (gauge)
/// - `certificate_valid{cert_file,subject}` (gauge, 1 or 0)
/// - `certificate_reloads_total{cert_file,status}` (counter)
/// - `certificate_monitoring_errors_total{cert_file,error_type}` (counter)
#[cfg_attr(test, mockall::automock)]
pub trait MetricsSink: Send + Sync {
    fn set_expiry_days(&self, cert_file: &str, subject: &str, issuer: &str, days: f64);

    fn set_valid(&self, cert_file: &str, subject: &str, valid: bool);

    fn inc_reload(&self, cert_file: &str, status: ReloadStatus);

    fn inc_monitoring_error(&self, cert_file: &str, error_type: MonitoringErrorType);
}
