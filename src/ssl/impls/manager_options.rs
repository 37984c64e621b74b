use crate::ssl::structs::manager_options::ManagerOptions;

pub const DEFAULT_EXPIRY_WARNING_DAYS: i64 = 30;
/// Upper bound accepted for `check_interval` in the configuration.
pub const MAX_CHECK_INTERVAL_SECS: u64 = 86_400;

impl Default for ManagerOptions {
    fn default() -> Self {
        Self {
            expiry_warning_days: DEFAULT_EXPIRY_WARNING_DAYS,
        }
    }
}
