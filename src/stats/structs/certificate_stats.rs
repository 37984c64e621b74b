use crate::stats::enums::monitoring_error_type::MonitoringErrorType;
use crate::stats::enums::reload_status::ReloadStatus;
use parking_lot::RwLock;
use std::collections::BTreeMap;

pub struct CertificateStats {
    pub(crate) expiry_days: RwLock<BTreeMap<(String, String, String), f64>>,
    pub(crate) valid: RwLock<BTreeMap<(String, String), bool>>,
    pub(crate) reloads: RwLock<BTreeMap<(String, ReloadStatus), u64>>,
    pub(crate) monitoring_errors: RwLock<BTreeMap<(String, MonitoringErrorType), u64>>,
}
