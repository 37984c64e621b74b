#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ManagerOptions {
    /// Certificates expiring within this many days are logged as a warning on load.
    pub expiry_warning_days: i64,
}
