mod common;

use common::*;
use hotcert::ssl::enums::certificate_error::CertificateError;
use hotcert::ssl::enums::monitor_state::MonitorState;
use hotcert::ssl::ssl::create_server_config_with_resolver;
use hotcert::ssl::structs::certificate_paths::CertificatePaths;
use hotcert::ssl::structs::dynamic_certificate_resolver::DynamicCertificateResolver;
use hotcert::ssl::structs::leaf_metadata::LeafMetadata;
use hotcert::stats::enums::monitoring_error_type::MonitoringErrorType;
use hotcert::stats::enums::reload_status::ReloadStatus;
use parking_lot::Mutex;
use std::fs;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

#[test]
fn test_load_certificate_success() {
    let files = install_pair(&generate_valid_pair("alpha.localhost"));
    let (manager, stats) = create_manager(&files);

    assert!(manager.get_current_certificate().is_none());
    assert!(manager.last_known_mod_time().is_none());

    let material = manager.load_certificate().unwrap();
    assert!(material.subject().contains("alpha.localhost"));
    assert!(manager.last_known_mod_time().is_some());
    assert_eq!(manager.store().generation(), 1);
    assert_eq!(manager.state(), MonitorState::Idle);

    assert_eq!(stats.reload_count(&files.cert_path, ReloadStatus::Success), 1);
    assert_eq!(stats.is_valid(&files.cert_path), Some(true));
    let days = stats.expiry_days(&files.cert_path).unwrap();
    assert!((88.0..=90.0).contains(&days));

    let info = manager.certificate_info().unwrap();
    assert!(info.is_valid);
    assert!(!info.is_expired);
    assert_eq!(info.cert_file, files.cert_path);
}

#[test]
fn test_load_certificate_expired() {
    let files = install_pair(&generate_pair("old.localhost", -60, -2));
    let (manager, stats) = create_manager(&files);

    let result = manager.load_certificate();
    assert!(matches!(result, Err(CertificateError::Expired { .. })));
    assert!(manager.get_current_certificate().is_none());
    assert!(manager.last_known_mod_time().is_none());
    assert_eq!(stats.reload_count(&files.cert_path, ReloadStatus::Error), 1);
    assert_eq!(stats.monitoring_error_count(&files.cert_path, MonitoringErrorType::ExpiryCheck), 1);
    assert!(matches!(manager.certificate_info(), Err(CertificateError::NotLoaded)));

    let disk = manager.certificate_info_from_disk().unwrap();
    assert!(disk.is_expired);
    assert!(!disk.is_valid);
    assert!(disk.days_until_expiry < 0);
}

#[test]
fn test_load_certificate_missing_files() {
    let files = install_pair(&generate_valid_pair("alpha.localhost"));
    fs::remove_file(&files.key_path).unwrap();
    let (manager, stats) = create_manager(&files);

    assert!(matches!(manager.load_certificate(), Err(CertificateError::FileNotFound(_))));
    assert_eq!(stats.monitoring_error_count(&files.cert_path, MonitoringErrorType::FileAccess), 1);
    assert_eq!(stats.reload_count(&files.cert_path, ReloadStatus::Success), 0);
}

#[test]
fn test_load_certificate_with_chain() {
    let ca = TestCa::new("Test Root");
    let files = install_pair(&ca.sign("chained.localhost"));
    let ca_path = path_string(files.dir.path().join("ca.crt"));
    fs::write(&ca_path, &ca.pem).unwrap();

    let paths = CertificatePaths::new(&files.cert_path, &files.key_path).with_ca(&ca_path);
    let (manager, _) = create_manager_with_paths(paths);
    assert!(manager.load_certificate().is_ok());

    let foreign = TestCa::new("Foreign Root");
    fs::write(&ca_path, &foreign.pem).unwrap();
    let paths = CertificatePaths::new(&files.cert_path, &files.key_path).with_ca(&ca_path);
    let (manager, stats) = create_manager_with_paths(paths);
    assert!(matches!(manager.load_certificate(), Err(CertificateError::ChainInvalid(_))));
    assert_eq!(stats.monitoring_error_count(&files.cert_path, MonitoringErrorType::Chain), 1);
}

#[test]
fn test_start_monitoring_requires_runtime() {
    let files = install_pair(&generate_valid_pair("alpha.localhost"));
    let (manager, _) = create_manager(&files);
    assert!(matches!(
        manager.start_monitoring(MONITOR_INTERVAL),
        Err(CertificateError::NoRuntime)
    ));
    assert_eq!(manager.state(), MonitorState::Idle);
}

#[tokio::test]
async fn test_start_monitoring_rejects_zero_interval() {
    let files = install_pair(&generate_valid_pair("alpha.localhost"));
    let (manager, _) = create_manager(&files);
    assert!(matches!(
        manager.start_monitoring(Duration::ZERO),
        Err(CertificateError::InvalidInterval)
    ));
    assert_eq!(manager.state(), MonitorState::Idle);
}

#[tokio::test]
async fn test_start_monitoring_rejects_unschedulable_interval() {
    let files = install_pair(&generate_valid_pair("alpha.localhost"));
    let (manager, _) = create_manager(&files);
    assert!(matches!(
        manager.start_monitoring(Duration::from_secs(u64::MAX)),
        Err(CertificateError::InvalidInterval)
    ));
    assert_eq!(manager.state(), MonitorState::Idle);

    // A rejected start leaves the manager startable.
    manager.start_monitoring(MONITOR_INTERVAL).unwrap();
    assert_eq!(manager.state(), MonitorState::Running);
    manager.stop_monitoring();
}

#[tokio::test]
async fn test_monitor_state_transitions() {
    let files = install_pair(&generate_valid_pair("alpha.localhost"));
    let (manager, _) = create_manager(&files);
    manager.load_certificate().unwrap();

    // Stopping before starting is a no-op.
    manager.stop_monitoring();
    assert_eq!(manager.state(), MonitorState::Idle);

    manager.start_monitoring(MONITOR_INTERVAL).unwrap();
    assert_eq!(manager.state(), MonitorState::Running);
    manager.start_monitoring(MONITOR_INTERVAL).unwrap();
    assert_eq!(manager.state(), MonitorState::Running);

    manager.stop_monitoring();
    assert_eq!(manager.state(), MonitorState::Stopped);
    manager.stop_monitoring();
    assert_eq!(manager.state(), MonitorState::Stopped);

    assert!(matches!(
        manager.start_monitoring(MONITOR_INTERVAL),
        Err(CertificateError::MonitorStopped)
    ));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_rotation_swaps_once_and_notifies() {
    let files = install_pair(&generate_valid_pair("alpha.localhost"));
    let (manager, stats) = create_manager(&files);
    manager.load_certificate().unwrap();

    let notified = Arc::new(Mutex::new(Vec::new()));
    let notified_clone = Arc::clone(&notified);
    manager.set_reload_callback(move |material| {
        notified_clone.lock().push(material.subject().to_string());
        Ok(())
    });
    manager.start_monitoring(MONITOR_INTERVAL).unwrap();

    let before = stats.reload_count(&files.cert_path, ReloadStatus::Success);
    rotate(&files, &generate_valid_pair("beta.localhost"), future_time(10));

    assert!(
        wait_until(|| manager
            .get_current_certificate()
            .is_some_and(|m| m.subject().contains("beta.localhost")))
        .await
    );
    sleep_intervals(4).await;

    assert_eq!(stats.reload_count(&files.cert_path, ReloadStatus::Success), before + 1);
    let notified = notified.lock().clone();
    assert_eq!(notified.len(), 1);
    assert!(notified[0].contains("beta.localhost"));
    assert_eq!(manager.store().generation(), 2);
    assert_eq!(manager.last_known_mod_time(), Some(fs::metadata(&files.cert_path).unwrap().modified().unwrap()));

    manager.stop_monitoring();
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_corrupt_replacement_keeps_current() {
    let files = install_pair(&generate_valid_pair("alpha.localhost"));
    let (manager, stats) = create_manager(&files);
    let original = manager.load_certificate().unwrap();

    let callbacks = Arc::new(AtomicUsize::new(0));
    let callbacks_clone = Arc::clone(&callbacks);
    manager.set_reload_callback(move |_| {
        callbacks_clone.fetch_add(1, Ordering::SeqCst);
        Ok(())
    });
    manager.start_monitoring(MONITOR_INTERVAL).unwrap();

    let pem = original_pem_prefix(&files.cert_path);
    replace_atomically(&files.cert_path, &pem, future_time(10));

    assert!(wait_until(|| stats.monitoring_error_count(&files.cert_path, MonitoringErrorType::Parse) >= 1).await);
    let current = manager.get_current_certificate().unwrap();
    assert!(Arc::ptr_eq(&current, &original));
    assert_eq!(manager.store().generation(), 1);
    assert_eq!(callbacks.load(Ordering::SeqCst), 0);
    assert!(stats.reload_count(&files.cert_path, ReloadStatus::Error) >= 1);

    // The failed attempt does not advance the watermark, so a repaired
    // file with the same timestamp is still picked up.
    let repaired = generate_valid_pair("repaired.localhost");
    let mtime = fs::metadata(&files.cert_path).unwrap().modified().unwrap();
    rotate(&files, &repaired, mtime);
    assert!(
        wait_until(|| manager
            .get_current_certificate()
            .is_some_and(|m| m.subject().contains("repaired.localhost")))
        .await
    );
    assert!(wait_until(|| callbacks.load(Ordering::SeqCst) == 1).await);

    manager.stop_monitoring();
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_torn_rotation_is_retried_until_pair_matches() {
    let files = install_pair(&generate_valid_pair("alpha.localhost"));
    let (manager, stats) = create_manager(&files);
    let original = manager.load_certificate().unwrap();

    let notified = Arc::new(Mutex::new(Vec::new()));
    let notified_clone = Arc::clone(&notified);
    manager.set_reload_callback(move |material| {
        notified_clone.lock().push(material.subject().to_string());
        Ok(())
    });
    manager.start_monitoring(MONITOR_INTERVAL).unwrap();
    let successes = stats.reload_count(&files.cert_path, ReloadStatus::Success);

    // New certificate lands first, still paired with the old key.
    let next = generate_valid_pair("beta.localhost");
    replace_atomically(&files.cert_path, &next.cert, future_time(10));

    assert!(wait_until(|| stats.monitoring_error_count(&files.cert_path, MonitoringErrorType::Parse) >= 1).await);
    assert!(Arc::ptr_eq(&manager.get_current_certificate().unwrap(), &original));
    assert_eq!(manager.store().generation(), 1);
    assert!(notified.lock().is_empty());

    replace_atomically(&files.key_path, &next.key, future_time(20));

    assert!(
        wait_until(|| manager
            .get_current_certificate()
            .is_some_and(|m| m.subject().contains("beta.localhost")))
        .await
    );
    sleep_intervals(4).await;

    assert_eq!(manager.store().generation(), 2);
    assert_eq!(stats.reload_count(&files.cert_path, ReloadStatus::Success), successes + 1);
    let notified = notified.lock().clone();
    assert_eq!(notified.len(), 1);
    assert!(notified[0].contains("beta.localhost"));

    manager.stop_monitoring();
}

fn original_pem_prefix(path: &str) -> String {
    let pem = fs::read_to_string(path).unwrap();
    pem[..pem.len() / 2].to_string()
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_expired_replacement_is_rejected() {
    let files = install_pair(&generate_valid_pair("alpha.localhost"));
    let (manager, stats) = create_manager(&files);
    manager.load_certificate().unwrap();
    manager.start_monitoring(MONITOR_INTERVAL).unwrap();

    rotate(&files, &generate_pair("expired.localhost", -30, -1), future_time(10));

    assert!(wait_until(|| stats.monitoring_error_count(&files.cert_path, MonitoringErrorType::ExpiryCheck) >= 1).await);
    assert!(manager.get_current_certificate().unwrap().subject().contains("alpha.localhost"));
    assert_eq!(manager.store().generation(), 1);

    manager.stop_monitoring();
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_foreign_chain_replacement_is_rejected() {
    let ca = TestCa::new("Test Root");
    let files = install_pair(&ca.sign("chained.localhost"));
    let ca_path = path_string(files.dir.path().join("ca.crt"));
    fs::write(&ca_path, &ca.pem).unwrap();
    let paths = CertificatePaths::new(&files.cert_path, &files.key_path).with_ca(&ca_path);
    let (manager, stats) = create_manager_with_paths(paths);
    manager.load_certificate().unwrap();
    manager.start_monitoring(MONITOR_INTERVAL).unwrap();

    let foreign = TestCa::new("Foreign Root");
    rotate(&files, &foreign.sign("intruder.localhost"), future_time(10));

    assert!(wait_until(|| stats.monitoring_error_count(&files.cert_path, MonitoringErrorType::Chain) >= 1).await);
    assert!(manager.get_current_certificate().unwrap().subject().contains("chained.localhost"));

    // A correctly chained replacement is still accepted afterwards.
    rotate(&files, &ca.sign("renewed.localhost"), future_time(20));
    assert!(
        wait_until(|| manager
            .get_current_certificate()
            .is_some_and(|m| m.subject().contains("renewed.localhost")))
        .await
    );

    manager.stop_monitoring();
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_no_swap_after_stop() {
    let files = install_pair(&generate_valid_pair("alpha.localhost"));
    let (manager, stats) = create_manager(&files);
    manager.load_certificate().unwrap();
    manager.start_monitoring(MONITOR_INTERVAL).unwrap();
    manager.stop_monitoring();

    rotate(&files, &generate_valid_pair("beta.localhost"), future_time(10));
    sleep_intervals(5).await;

    assert!(manager.get_current_certificate().unwrap().subject().contains("alpha.localhost"));
    assert_eq!(manager.store().generation(), 1);
    assert_eq!(stats.reload_count(&files.cert_path, ReloadStatus::Success), 1);
    assert_eq!(manager.state(), MonitorState::Stopped);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_removed_files_keep_current() {
    let files = install_pair(&generate_valid_pair("alpha.localhost"));
    let (manager, stats) = create_manager(&files);
    manager.load_certificate().unwrap();
    manager.start_monitoring(MONITOR_INTERVAL).unwrap();

    fs::remove_file(&files.cert_path).unwrap();
    assert!(wait_until(|| stats.monitoring_error_count(&files.cert_path, MonitoringErrorType::FileAccess) >= 1).await);
    assert!(manager.get_current_certificate().is_some());
    assert_eq!(manager.store().generation(), 1);

    manager.stop_monitoring();
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_callback_failures_do_not_stop_monitoring() {
    let files = install_pair(&generate_valid_pair("alpha.localhost"));
    let (manager, _) = create_manager(&files);
    manager.load_certificate().unwrap();

    let calls = Arc::new(AtomicUsize::new(0));
    let calls_clone = Arc::clone(&calls);
    manager.set_reload_callback(move |_| {
        let call = calls_clone.fetch_add(1, Ordering::SeqCst);
        if call == 0 {
            return Err("subscriber rejected the certificate".into());
        }
        panic!("subscriber crashed");
    });
    manager.start_monitoring(MONITOR_INTERVAL).unwrap();

    rotate(&files, &generate_valid_pair("beta.localhost"), future_time(10));
    assert!(wait_until(|| calls.load(Ordering::SeqCst) == 1).await);

    rotate(&files, &generate_valid_pair("gamma.localhost"), future_time(20));
    assert!(wait_until(|| calls.load(Ordering::SeqCst) == 2).await);

    rotate(&files, &generate_valid_pair("delta.localhost"), future_time(30));
    assert!(
        wait_until(|| manager
            .get_current_certificate()
            .is_some_and(|m| m.subject().contains("delta.localhost")))
        .await
    );
    assert_eq!(manager.state(), MonitorState::Running);
    assert_eq!(manager.store().generation(), 4);

    manager.stop_monitoring();
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_cleared_callback_is_not_invoked() {
    let files = install_pair(&generate_valid_pair("alpha.localhost"));
    let (manager, _) = create_manager(&files);
    manager.load_certificate().unwrap();

    let called = Arc::new(AtomicBool::new(false));
    let called_clone = Arc::clone(&called);
    manager.set_reload_callback(move |_| {
        called_clone.store(true, Ordering::SeqCst);
        Ok(())
    });
    manager.clear_reload_callback();
    manager.start_monitoring(MONITOR_INTERVAL).unwrap();

    rotate(&files, &generate_valid_pair("beta.localhost"), future_time(10));
    assert!(wait_until(|| manager.store().generation() == 2).await);
    sleep_intervals(2).await;
    assert!(!called.load(Ordering::SeqCst));

    manager.stop_monitoring();
}

#[test]
fn test_reload_now_ignores_mtime() {
    let files = install_pair(&generate_valid_pair("alpha.localhost"));
    let (manager, stats) = create_manager(&files);
    manager.load_certificate().unwrap();
    let mtime = manager.last_known_mod_time().unwrap();

    let calls = Arc::new(AtomicUsize::new(0));
    let calls_clone = Arc::clone(&calls);
    manager.set_reload_callback(move |_| {
        calls_clone.fetch_add(1, Ordering::SeqCst);
        Ok(())
    });

    // Same timestamp as before: only a forced reload picks this up.
    rotate(&files, &generate_valid_pair("beta.localhost"), mtime);
    let material = manager.reload_now().unwrap();
    assert!(material.subject().contains("beta.localhost"));
    assert_eq!(manager.store().generation(), 2);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(manager.last_known_mod_time(), Some(mtime));
    assert_eq!(stats.reload_count(&files.cert_path, ReloadStatus::Success), 2);

    fs::write(&files.key_path, "").unwrap();
    assert!(matches!(manager.reload_now(), Err(CertificateError::ParseError(_))));
    assert!(manager.get_current_certificate().unwrap().subject().contains("beta.localhost"));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_readers_see_consistent_material() {
    let files = install_pair(&generate_valid_pair("gen-0.localhost"));
    let (manager, _) = create_manager(&files);
    manager.load_certificate().unwrap();
    manager.start_monitoring(MONITOR_INTERVAL).unwrap();

    let done = Arc::new(AtomicBool::new(false));
    let mut readers = Vec::new();
    for _ in 0..4 {
        let manager = Arc::clone(&manager);
        let done = Arc::clone(&done);
        readers.push(std::thread::spawn(move || {
            let store = manager.store();
            let mut last_generation = 0;
            let mut reads = 0u64;
            while !done.load(Ordering::SeqCst) {
                let generation = store.generation();
                assert!(generation >= last_generation);
                last_generation = generation;

                let material = manager.get_current_certificate().expect("never regresses to absent");
                assert_eq!(material.certified_key.cert[0], material.certs[0]);
                let reparsed = LeafMetadata::parse(&material.certs[0]).unwrap();
                assert_eq!(reparsed.subject, material.leaf.subject);
                assert_eq!(reparsed.serial, material.leaf.serial);
                reads += 1;
            }
            reads
        }));
    }

    for generation in 1..=3u64 {
        rotate(
            &files,
            &generate_valid_pair(&format!("gen-{}.localhost", generation)),
            future_time(10 * generation),
        );
        assert!(wait_until(|| manager.store().generation() == generation + 1).await);
    }
    done.store(true, Ordering::SeqCst);

    for reader in readers {
        assert!(reader.join().unwrap() > 0);
    }
    assert!(manager.get_current_certificate().unwrap().subject().contains("gen-3.localhost"));
    manager.stop_monitoring();
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_monitor_reports_expiry_without_active_certificate() {
    let files = install_pair(&generate_pair("old.localhost", -60, -2));
    let (manager, stats) = create_manager(&files);
    assert!(manager.load_certificate().is_err());
    manager.start_monitoring(MONITOR_INTERVAL).unwrap();

    assert!(wait_until(|| stats.expiry_days(&files.cert_path).is_some_and(|days| days < 0.0)).await);
    assert_eq!(stats.is_valid(&files.cert_path), Some(false));
    assert!(manager.get_current_certificate().is_none());

    manager.stop_monitoring();
}

#[test]
fn test_resolver_follows_store() {
    let ca = TestCa::new("resolver-ca");
    let files = install_pair(&ca.sign("alpha.localhost"));
    let (manager, _) = create_manager(&files);
    let resolver = Arc::new(DynamicCertificateResolver::new(Arc::clone(&manager)));
    assert!(!resolver.has_certificate());
    assert!(resolver.current_key().is_none());
    let server_config = Arc::new(create_server_config_with_resolver(Arc::clone(&resolver)).unwrap());

    let first = manager.load_certificate().unwrap();
    assert!(resolver.has_certificate());
    assert!(Arc::ptr_eq(&resolver.current_key().unwrap(), &first.certified_key));
    assert_eq!(handshake_leaf(Arc::clone(&server_config), &ca.pem), first.certs[0]);

    rotate(&files, &ca.sign("beta.localhost"), future_time(10));
    let second = manager.reload_now().unwrap();
    assert_ne!(first.certs[0], second.certs[0]);
    assert!(Arc::ptr_eq(&resolver.current_key().unwrap(), &second.certified_key));
    assert_eq!(handshake_leaf(server_config, &ca.pem), second.certs[0]);
}
