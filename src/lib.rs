//! # hotcert
//!
//! Loads, validates and hot-reloads an X.509 certificate and private key for
//! a TLS server, and reports certificate health as metrics.
//!
//! ## Overview
//!
//! A [`ssl::structs::certificate_manager::CertificateManager`] owns a
//! certificate/key pair on disk. It performs a synchronous initial load,
//! then a background monitor checks the files' modification times on a
//! fixed interval. Changed files are parsed and validated, checked against
//! an optional CA bundle, and atomically swapped into the store that TLS
//! handshakes read from. Broken or expired replacements never displace a
//! working certificate.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use hotcert::ssl::structs::certificate_manager::CertificateManager;
//! use hotcert::ssl::structs::certificate_paths::CertificatePaths;
//! use hotcert::stats::structs::certificate_stats::CertificateStats;
//!
//! let stats = Arc::new(CertificateStats::new());
//! let manager = Arc::new(CertificateManager::new(
//!     CertificatePaths::new("certs/tls.crt", "certs/tls.key"),
//!     stats.clone(),
//! ));
//! manager.load_certificate()?;
//! manager.set_reload_callback(|material| {
//!     println!("now serving {}", material.subject());
//!     Ok(())
//! });
//! manager.start_monitoring(Duration::from_secs(30))?;
//! ```
//!
//! ## Modules
//!
//! - [`api`] - HTTPS status and metrics endpoints
//! - [`common`] - Logging setup and development certificate generation
//! - [`config`] - Configuration management and TOML parsing
//! - [`ssl`] - Certificate loading, validation, storage and monitoring
//! - [`stats`] - Certificate health metrics
//! - [`structs`] - CLI argument parsing

/// HTTPS status API served with the managed certificate.
pub mod api;

/// Logging setup, self-signed certificate generation and the shared error type.
pub mod common;

/// Configuration management module.
pub mod config;

/// Certificate lifecycle management.
///
/// File probing, loading and validation, chain verification, the atomic
/// certificate store, the monitor loop and reload notifications.
pub mod ssl;

/// Certificate health metrics.
pub mod stats;

/// CLI argument parsing.
pub mod structs;
