use crate::stats::enums::monitoring_error_type::MonitoringErrorType;
use crate::stats::enums::reload_status::ReloadStatus;
use crate::stats::structs::certificate_stats::CertificateStats;
use crate::stats::traits::metrics_sink::MetricsSink;
use parking_lot::RwLock;
use std::collections::BTreeMap;
use std::fmt::Write;

impl std::fmt::Debug for CertificateStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CertificateStats")
            .field("expiry_series", &self.expiry_days.read().len())
            .field("reload_series", &self.reloads.read().len())
            .field("error_series", &self.monitoring_errors.read().len())
            .finish()
    }
}

impl Default for CertificateStats {
    fn default() -> Self {
        Self::new()
    }
}

impl CertificateStats {
    pub fn new() -> Self {
        Self {
            expiry_days: RwLock::new(BTreeMap::new()),
            valid: RwLock::new(BTreeMap::new()),
            reloads: RwLock::new(BTreeMap::new()),
            monitoring_errors: RwLock::new(BTreeMap::new()),
        }
    }

    pub fn expiry_days(&self, cert_file: &str) -> Option<f64> {
        self.expiry_days
            .read()
            .iter()
            .find(|((file, _, _), _)| file == cert_file)
            .map(|(_, days)| *days)
    }

    pub fn is_valid(&self, cert_file: &str) -> Option<bool> {
        self.valid
            .read()
            .iter()
            .find(|((file, _), _)| file == cert_file)
            .map(|(_, valid)| *valid)
    }

    pub fn reload_count(&self, cert_file: &str, status: ReloadStatus) -> u64 {
        self.reloads
            .read()
            .get(&(cert_file.to_string(), status))
            .copied()
            .unwrap_or(0)
    }

    pub fn monitoring_error_count(&self, cert_file: &str, error_type: MonitoringErrorType) -> u64 {
        self.monitoring_errors
            .read()
            .get(&(cert_file.to_string(), error_type))
            .copied()
            .unwrap_or(0)
    }

    pub fn render_prometheus(&self) -> String {
        let mut output = String::new();

        output.push_str("# HELP certificate_expiry_days Days until the certificate expires\n");
        output.push_str("# TYPE certificate_expiry_days gauge\n");
        for ((cert_file, subject, issuer), days) in self.expiry_days.read().iter() {
            let _ = writeln!(
                output,
                "certificate_expiry_days{{cert_file=\"{}\",subject=\"{}\",issuer=\"{}\"}} {}",
                escape_label(cert_file), escape_label(subject), escape_label(issuer), days
            );
        }

        output.push_str("# HELP certificate_valid Whether the certificate is currently valid\n");
        output.push_str("# TYPE certificate_valid gauge\n");
        for ((cert_file, subject), valid) in self.valid.read().iter() {
            let _ = writeln!(
                output,
                "certificate_valid{{cert_file=\"{}\",subject=\"{}\"}} {}",
                escape_label(cert_file), escape_label(subject), u8::from(*valid)
            );
        }

        output.push_str("# HELP certificate_reloads_total Certificate reload attempts by outcome\n");
        output.push_str("# TYPE certificate_reloads_total counter\n");
        for ((cert_file, status), count) in self.reloads.read().iter() {
            let _ = writeln!(
                output,
                "certificate_reloads_total{{cert_file=\"{}\",status=\"{}\"}} {}",
                escape_label(cert_file), status, count
            );
        }

        output.push_str("# HELP certificate_monitoring_errors_total Certificate monitoring failures by category\n");
        output.push_str("# TYPE certificate_monitoring_errors_total counter\n");
        for ((cert_file, error_type), count) in self.monitoring_errors.read().iter() {
            let _ = writeln!(
                output,
                "certificate_monitoring_errors_total{{cert_file=\"{}\",error_type=\"{}\"}} {}",
                escape_label(cert_file), error_type, count
            );
        }

        output
    }
}

impl MetricsSink for CertificateStats {
    fn set_expiry_days(&self, cert_file: &str, subject: &str, issuer: &str, days: f64) {
        let mut series = self.expiry_days.write();
        // One live series per file: a rotated certificate replaces its predecessor's labels.
        series.retain(|(file, _, _), _| file != cert_file);
        series.insert((cert_file.to_string(), subject.to_string(), issuer.to_string()), days);
    }

    fn set_valid(&self, cert_file: &str, subject: &str, valid: bool) {
        let mut series = self.valid.write();
        series.retain(|(file, _), _| file != cert_file);
        series.insert((cert_file.to_string(), subject.to_string()), valid);
    }

    fn inc_reload(&self, cert_file: &str, status: ReloadStatus) {
        *self
            .reloads
            .write()
            .entry((cert_file.to_string(), status))
            .or_insert(0) += 1;
    }

    fn inc_monitoring_error(&self, cert_file: &str, error_type: MonitoringErrorType) {
        *self
            .monitoring_errors
            .write()
            .entry((cert_file.to_string(), error_type))
            .or_insert(0) += 1;
    }
}

pub fn escape_label(value: &str) -> String {
    value
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}
