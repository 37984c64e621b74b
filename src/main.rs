use std::net::SocketAddr;
use std::process::exit;
use std::sync::Arc;
use std::time::Duration;
use clap::Parser;
use log::{error, info, warn};
use parking_lot::deadlock;
use tokio::runtime::Builder;
use hotcert::api::api::api_service;
use hotcert::api::structs::api_service_data::ApiServiceData;
use hotcert::common::common::{generate_self_signed, setup_logging};
use hotcert::config::structs::configuration::Configuration;
use hotcert::ssl::structs::certificate_manager::CertificateManager;
use hotcert::ssl::structs::certificate_paths::CertificatePaths;
use hotcert::ssl::structs::manager_options::ManagerOptions;
use hotcert::stats::structs::certificate_stats::CertificateStats;
use hotcert::structs::Cli;

fn main() -> std::io::Result<()>
{
    let args = Cli::parse();

    let config = match Configuration::load_from_file(&args.config, args.create_config) {
        Ok(config) => Arc::new(config),
        Err(_) => exit(101)
    };

    if let Err(e) = setup_logging(&config) {
        eprintln!("{}", e);
        exit(101);
    }

    info!("{} - Version: {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    if args.create_selfsigned {
        if let Err(e) = generate_self_signed(
            &args.selfsigned_domain,
            &args.selfsigned_certfile,
            &args.selfsigned_keyfile,
            args.selfsigned_days,
        ) {
            error!("{}", e);
            exit(1);
        }
        exit(0);
    }

    Builder::new_multi_thread()
        .thread_name("hotcert")
        .enable_all()
        .build()?
        .block_on(async {
            let mut paths = CertificatePaths::new(&config.certificate.cert_file, &config.certificate.key_file);
            if let Some(ca_file) = &config.certificate.ca_file {
                paths = paths.with_ca(ca_file);
            }
            let stats = Arc::new(CertificateStats::new());
            let manager = Arc::new(CertificateManager::with_options(
                paths,
                stats.clone(),
                ManagerOptions { expiry_warning_days: config.certificate.expiry_warning_days },
            ));

            match manager.load_certificate() {
                Ok(material) => info!("[BOOT] Serving certificate {}", material.subject()),
                Err(e) => {
                    error!("[BOOT] Unable to load certificate {}: {}", config.certificate.cert_file, e);
                    exit(1);
                }
            }

            manager.set_reload_callback(|material| {
                info!(
                    "[CALLBACK] Certificate reloaded: {} (valid until {})",
                    material.subject(),
                    material.leaf.not_after.to_rfc3339()
                );
                Ok(())
            });

            if let Err(e) = manager.start_monitoring(Duration::from_secs(config.certificate.check_interval)) {
                error!("[BOOT] Unable to start certificate monitoring: {}", e);
                exit(1);
            }

            let (deadlock_tx, mut deadlock_rx) = tokio::sync::watch::channel(false);
            tokio::spawn(async move {
                info!("[BOOT] Starting thread for deadlocks...");
                let mut interval = tokio::time::interval(Duration::from_secs(30));
                loop {
                    tokio::select! {
                        _ = interval.tick() => {
                            let deadlocks = deadlock::check_deadlock();
                            if !deadlocks.is_empty() {
                                warn!("[DEADLOCK] Found {} deadlocks", deadlocks.len());
                                for (i, threads) in deadlocks.iter().enumerate() {
                                    warn!("[DEADLOCK] #{i}");
                                    for t in threads {
                                        warn!("[DEADLOCK] Thread ID: {:#?}", t.thread_id());
                                        warn!("[DEADLOCK] {:#?}", t.backtrace());
                                    }
                                }
                            }
                        }
                        _ = deadlock_rx.changed() => {
                            info!("[BOOT] Shutting down thread for deadlocks...");
                            return;
                        }
                    }
                }
            });

            let mut api_handle = None;
            if config.server.enabled {
                let address: SocketAddr = match config.server.bind_address.parse() {
                    Ok(address) => address,
                    Err(e) => {
                        error!("[API] Invalid bind address {}: {}", config.server.bind_address, e);
                        exit(1);
                    }
                };
                let data = Arc::new(ApiServiceData {
                    certificate_manager: Arc::clone(&manager),
                    certificate_stats: stats.clone(),
                });
                match api_service(address, data, config.server.threads.unwrap_or(1)) {
                    Ok((handle, future)) => {
                        tokio::spawn(async move {
                            if let Err(e) = future.await {
                                error!("[API] Server stopped with error: {}", e);
                            }
                        });
                        api_handle = Some(handle);
                    }
                    Err(e) => {
                        error!("[API] Unable to bind {}: {}", address, e);
                        exit(1);
                    }
                }
            }

            tokio::signal::ctrl_c().await?;
            info!("Shutdown request received, shutting down...");

            if let Some(handle) = api_handle {
                handle.stop(true).await;
            }
            manager.stop_monitoring();
            let _ = deadlock_tx.send(true);

            info!("Server shutting down completed");
            Ok(())
        })
}
