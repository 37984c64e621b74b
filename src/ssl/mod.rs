//! SSL/TLS certificate management module.
//!
//! This module loads a PEM certificate chain and private key, keeps the
//! validated material in a concurrency-safe store and hot-reloads it when
//! the files on disk change, without restarting the server using it.
//!
//! # Features
//!
//! - Validation of the key pair and the certificate validity window
//! - Optional chain verification against a CA bundle
//! - Lock-protected `Arc` swap: handshakes never see a half-updated certificate
//! - Background monitor polling modification times on a fixed interval
//! - Reload callback and expiry metrics after every change
//!
//! # Reload semantics
//!
//! A failed reload never replaces a working certificate. The monitor keeps
//! serving the last good material and retries on every tick while the
//! files on disk are broken or mid-rotation. Only the first, synchronous
//! load reports failures to the caller.
//!
//! # Example
//!
//! ```rust,ignore
//! use hotcert::ssl::structs::certificate_manager::CertificateManager;
//! use hotcert::ssl::structs::certificate_paths::CertificatePaths;
//!
//! let manager = Arc::new(CertificateManager::new(
//!     CertificatePaths::new("tls.crt", "tls.key"),
//!     Arc::new(CertificateStats::new()),
//! ));
//! manager.load_certificate()?;
//! manager.start_monitoring(Duration::from_secs(30))?;
//! ```

/// Error and lifecycle enumerations.
pub mod enums;

/// Implementation blocks for certificate management types.
pub mod impls;

/// Certificate management data structures.
pub mod structs;

/// File probing, PEM reading and rustls server configuration helpers.
#[allow(clippy::module_inception)]
pub mod ssl;
