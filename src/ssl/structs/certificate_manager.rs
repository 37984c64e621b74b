use crate::ssl::enums::monitor_state::MonitorState;
use crate::ssl::structs::certificate_material::CertificateMaterial;
use crate::ssl::structs::certificate_paths::CertificatePaths;
use crate::ssl::structs::certificate_store::CertificateStore;
use crate::ssl::structs::chain_verifier::ChainVerifier;
use crate::ssl::structs::manager_options::ManagerOptions;
use crate::stats::structs::expiry_reporter::ExpiryReporter;
use parking_lot::{Mutex, RwLock};
use std::sync::Arc;
use std::time::SystemTime;
use tokio::sync::watch;

pub type ReloadCallbackResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;

/// Subscriber notified with the new material after every successful reload.
pub type ReloadCallback = Arc<dyn Fn(Arc<CertificateMaterial>) -> ReloadCallbackResult + Send + Sync>;

/// Owns one certificate identity: its files, the active material and the
/// background monitor keeping it fresh.
pub struct CertificateManager {
    pub(crate) paths: CertificatePaths,
    pub(crate) options: ManagerOptions,
    pub(crate) store: Arc<CertificateStore>,
    pub(crate) verifier: ChainVerifier,
    pub(crate) reporter: ExpiryReporter,
    pub(crate) last_mod_time: Mutex<Option<SystemTime>>,
    pub(crate) reload_callback: RwLock<Option<ReloadCallback>>,
    /// Store generation last handed to the reload callback.
    pub(crate) dispatched_generation: Mutex<u64>,
    pub(crate) state: Mutex<MonitorState>,
    pub(crate) shutdown: Mutex<Option<watch::Sender<bool>>>,
    pub(crate) writer: Mutex<()>,
}
