use crate::ssl::enums::certificate_error::CertificateError;
use crate::ssl::enums::monitor_state::MonitorState;
use crate::ssl::ssl::{check_regular_file, newest_modified_time, read_certificates};
use crate::ssl::structs::certificate_info::CertificateInfo;
use crate::ssl::structs::certificate_manager::{CertificateManager, ReloadCallback, ReloadCallbackResult};
use crate::ssl::structs::certificate_material::CertificateMaterial;
use crate::ssl::structs::certificate_paths::CertificatePaths;
use crate::ssl::structs::certificate_store::CertificateStore;
use crate::ssl::structs::chain_verifier::ChainVerifier;
use crate::ssl::structs::leaf_metadata::LeafMetadata;
use crate::ssl::structs::manager_options::ManagerOptions;
use crate::stats::enums::monitoring_error_type::MonitoringErrorType;
use crate::stats::enums::reload_status::ReloadStatus;
use crate::stats::structs::expiry_reporter::ExpiryReporter;
use crate::stats::traits::metrics_sink::MetricsSink;
use log::{debug, error, info, warn};
use parking_lot::{Mutex, RwLock};
use std::panic::AssertUnwindSafe;
use std::sync::{Arc, Weak};
use std::time::{Duration, SystemTime};
use tokio::sync::watch;
use tokio::time::MissedTickBehavior;

impl std::fmt::Debug for CertificateManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CertificateManager")
            .field("paths", &self.paths)
            .field("store", &self.store)
            .field("state", &*self.state.lock())
            .field("has_reload_callback", &self.reload_callback.read().is_some())
            .finish()
    }
}

impl CertificateManager {
    pub fn new(paths: CertificatePaths, metrics: Arc<dyn MetricsSink>) -> Self {
        Self::with_options(paths, metrics, ManagerOptions::default())
    }

    pub fn with_options(
        paths: CertificatePaths,
        metrics: Arc<dyn MetricsSink>,
        options: ManagerOptions,
    ) -> Self {
        Self {
            reporter: ExpiryReporter::new(&paths.cert_path, metrics),
            verifier: ChainVerifier::new(paths.ca_path.clone()),
            paths,
            options,
            store: Arc::new(CertificateStore::new()),
            last_mod_time: Mutex::new(None),
            reload_callback: RwLock::new(None),
            dispatched_generation: Mutex::new(0),
            state: Mutex::new(MonitorState::Idle),
            shutdown: Mutex::new(None),
            writer: Mutex::new(()),
        }
    }

    pub fn paths(&self) -> &CertificatePaths {
        &self.paths
    }

    pub fn store(&self) -> Arc<CertificateStore> {
        Arc::clone(&self.store)
    }

    pub fn state(&self) -> MonitorState {
        *self.state.lock()
    }

    pub fn last_known_mod_time(&self) -> Option<SystemTime> {
        *self.last_mod_time.lock()
    }

    /// Current material for a handshake. Never blocks on a reload in progress.
    pub fn get_current_certificate(&self) -> Option<Arc<CertificateMaterial>> {
        self.store.get_current()
    }

    /// Synchronous cold-start load.
    ///
    /// Every failure is returned to the caller; there is no previous
    /// certificate to fall back on at this point.
    pub fn load_certificate(&self) -> Result<Arc<CertificateMaterial>, CertificateError> {
        let _writer = self.writer.lock();
        let observed = self.probe().inspect_err(|e| self.reporter.record_error(e))?;
        let material = self.build_material().inspect_err(|e| self.record_failed_reload(e))?;
        let (material, _) = self.publish(material, observed);
        info!(
            "[CERTIFICATE] Loaded {} ({}), valid until {}",
            self.paths.cert_path, material.leaf.subject, material.leaf.not_after
        );
        Ok(material)
    }

    /// Reloads from disk regardless of modification time.
    ///
    /// On success the reload callback fires, just like a reload detected by
    /// the monitor. On failure the active certificate is left untouched.
    pub fn reload_now(&self) -> Result<Arc<CertificateMaterial>, CertificateError> {
        let (material, generation) = {
            let _writer = self.writer.lock();
            let observed = self.probe().inspect_err(|e| self.reporter.record_error(e))?;
            let material = self.build_material().inspect_err(|e| self.record_failed_reload(e))?;
            self.publish(material, observed)
        };
        info!(
            "[RELOAD] Forced reload of {} ({})",
            self.paths.cert_path, material.leaf.subject
        );
        self.dispatch_reload_callback(Arc::clone(&material), generation);
        Ok(material)
    }

    /// Registers the reload subscriber, replacing any previous one.
    ///
    /// Notifications are delivered in swap order, and one that has been
    /// overtaken by a newer swap is dropped. The callback must not call
    /// [`Self::reload_now`] on the same manager.
    pub fn set_reload_callback<F>(&self, callback: F)
    where
        F: Fn(Arc<CertificateMaterial>) -> ReloadCallbackResult + Send + Sync + 'static,
    {
        let callback: ReloadCallback = Arc::new(callback);
        *self.reload_callback.write() = Some(callback);
    }

    pub fn clear_reload_callback(&self) {
        *self.reload_callback.write() = None;
    }

    /// Spawns the monitor on the current Tokio runtime, checking the files
    /// every `interval`.
    ///
    /// Calling this while already running is a no-op. A stopped manager
    /// cannot be restarted.
    pub fn start_monitoring(self: &Arc<Self>, interval: Duration) -> Result<(), CertificateError> {
        if interval.is_zero() {
            return Err(CertificateError::InvalidInterval);
        }
        let first_tick = tokio::time::Instant::now()
            .checked_add(interval)
            .ok_or(CertificateError::InvalidInterval)?;
        let runtime = tokio::runtime::Handle::try_current().map_err(|_| CertificateError::NoRuntime)?;

        let mut state = self.state.lock();
        match *state {
            MonitorState::Running => {
                warn!("[MONITOR] Monitoring of {} is already running", self.paths.cert_path);
                return Ok(());
            }
            MonitorState::Stopped => return Err(CertificateError::MonitorStopped),
            MonitorState::Idle => {}
        }

        let (shutdown_sender, shutdown_receiver) = watch::channel(false);
        *self.shutdown.lock() = Some(shutdown_sender);
        *state = MonitorState::Running;
        drop(state);

        info!(
            "[MONITOR] Starting certificate monitor for {} with {:?} interval...",
            self.paths.cert_path, interval
        );
        runtime.spawn(Self::monitor_loop(Arc::downgrade(self), first_tick, interval, shutdown_receiver));
        Ok(())
    }

    /// Stops the monitor. Takes effect before the next swap; calling it
    /// again, or before monitoring started, does nothing.
    pub fn stop_monitoring(&self) {
        let mut state = self.state.lock();
        if *state != MonitorState::Running {
            debug!("[MONITOR] Stop requested while {}, nothing to do", *state);
            return;
        }
        *state = MonitorState::Stopped;
        if let Some(shutdown) = self.shutdown.lock().take() {
            let _ = shutdown.send(true);
        }
        info!("[MONITOR] Stopping certificate monitor for {}", self.paths.cert_path);
    }

    pub fn certificate_info(&self) -> Result<CertificateInfo, CertificateError> {
        self.store
            .get_current()
            .map(|material| CertificateInfo::from_material(&material, chrono::Utc::now()))
            .ok_or(CertificateError::NotLoaded)
    }

    /// Info parsed straight from the certificate file, without validity
    /// enforcement, so broken or expired files can still be inspected.
    pub fn certificate_info_from_disk(&self) -> Result<CertificateInfo, CertificateError> {
        check_regular_file(&self.paths.cert_path)?;
        let certs = read_certificates(&self.paths.cert_path)?;
        let leaf = LeafMetadata::parse(&certs[0])?;
        Ok(CertificateInfo::from_leaf(&self.paths.cert_path, &leaf, chrono::Utc::now()))
    }

    async fn monitor_loop(
        manager: Weak<Self>,
        first_tick: tokio::time::Instant,
        period: Duration,
        mut shutdown: watch::Receiver<bool>,
    ) {
        let mut interval = tokio::time::interval_at(first_tick, period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            tokio::select! {
                _ = interval.tick() => {
                    let Some(manager) = manager.upgrade() else {
                        debug!("[MONITOR] Manager dropped, ending certificate monitor");
                        return;
                    };
                    manager.monitor_tick();
                }
                _ = shutdown.changed() => {
                    info!("[MONITOR] Shutting down certificate monitor...");
                    return;
                }
            }
        }
    }

    /// One monitor iteration: reload if the files advanced, then refresh
    /// the expiry signals whether or not a reload happened.
    pub(crate) fn monitor_tick(&self) {
        if let Some((material, generation)) = self.reload_if_changed() {
            self.dispatch_reload_callback(material, generation);
        }
        self.report_expiry();
    }

    fn reload_if_changed(&self) -> Option<(Arc<CertificateMaterial>, u64)> {
        let _writer = self.writer.lock();

        let observed = match self.probe() {
            Ok(observed) => observed,
            Err(e) => {
                warn!("[MONITOR] Unable to check {}: {}", self.paths.cert_path, e);
                self.reporter.record_error(&e);
                return None;
            }
        };
        if !self.has_advanced(observed) {
            return None;
        }

        info!("[MONITOR] Change detected for {}, reloading...", self.paths.cert_path);
        let material = match self.build_material() {
            Ok(material) => material,
            Err(e) => {
                warn!(
                    "[MONITOR] Reload of {} failed, keeping current certificate: {}",
                    self.paths.cert_path, e
                );
                self.record_failed_reload(&e);
                return None;
            }
        };

        let state = self.state.lock();
        if *state != MonitorState::Running {
            debug!("[MONITOR] Monitor stopped during reload, discarding new certificate");
            return None;
        }
        let (material, generation) = self.publish(material, observed);
        drop(state);

        info!(
            "[RELOAD] Reloaded {} ({}), valid until {}",
            self.paths.cert_path, material.leaf.subject, material.leaf.not_after
        );
        Some((material, generation))
    }

    fn report_expiry(&self) {
        let info = match self.store.get_current() {
            Some(material) => CertificateInfo::from_material(&material, chrono::Utc::now()),
            None => match self.certificate_info_from_disk() {
                Ok(info) => info,
                Err(e) => {
                    debug!("[MONITOR] Expiry check of {} failed: {}", self.paths.cert_path, e);
                    self.reporter.record_error_type(MonitoringErrorType::ExpiryCheck);
                    return;
                }
            },
        };

        if info.is_expired {
            error!(
                "[MONITOR] Certificate {} ({}) expired at {}",
                info.cert_file, info.subject, info.not_after
            );
        } else {
            debug!(
                "[MONITOR] Certificate {} expires in {} days",
                info.cert_file, info.days_until_expiry
            );
        }
        self.reporter.report(&info);
    }

    fn probe(&self) -> Result<SystemTime, CertificateError> {
        newest_modified_time(&self.paths.watched_files())
    }

    fn has_advanced(&self, observed: SystemTime) -> bool {
        match *self.last_mod_time.lock() {
            Some(last) => observed > last,
            None => true,
        }
    }

    fn build_material(&self) -> Result<CertificateMaterial, CertificateError> {
        let material = CertificateMaterial::load(
            &self.paths.cert_path,
            &self.paths.key_path,
            self.options.expiry_warning_days,
        )?;
        self.verifier.verify(&material)?;
        Ok(material)
    }

    /// Swaps `material` in and records the observed modification time.
    /// Callers hold the writer lock, so the returned store generation is the
    /// one this swap produced.
    fn publish(&self, material: CertificateMaterial, observed: SystemTime) -> (Arc<CertificateMaterial>, u64) {
        let material = Arc::new(material);
        self.store.swap(Arc::clone(&material));
        let generation = self.store.generation();
        {
            let mut last = self.last_mod_time.lock();
            if last.is_none_or(|previous| observed > previous) {
                *last = Some(observed);
            }
        }
        self.reporter.record_reload(ReloadStatus::Success);
        self.reporter
            .report(&CertificateInfo::from_material(&material, chrono::Utc::now()));
        (material, generation)
    }

    fn record_failed_reload(&self, error: &CertificateError) {
        self.reporter.record_reload(ReloadStatus::Error);
        self.reporter.record_error(error);
    }

    pub(crate) fn dispatch_reload_callback(&self, material: Arc<CertificateMaterial>, generation: u64) {
        let mut dispatched = self.dispatched_generation.lock();
        if generation <= *dispatched {
            debug!(
                "[CALLBACK] Skipping notification for generation {} of {}, already at {}",
                generation, self.paths.cert_path, *dispatched
            );
            return;
        }
        *dispatched = generation;
        let Some(callback) = self.reload_callback.read().clone() else {
            return;
        };
        match std::panic::catch_unwind(AssertUnwindSafe(|| callback(material))) {
            Ok(Ok(())) => debug!("[CALLBACK] Reload callback completed for {}", self.paths.cert_path),
            Ok(Err(e)) => error!("[CALLBACK] Reload callback failed for {}: {}", self.paths.cert_path, e),
            Err(_) => error!("[CALLBACK] Reload callback panicked for {}", self.paths.cert_path),
        }
    }
}
