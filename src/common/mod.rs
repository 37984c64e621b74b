//! Common utilities and shared functionality.
//!
//! - Logging setup (`fern` with colored levels)
//! - Self-signed development certificate generation
//! - `CustomError`, the error type handed back to the binary
//!
//! # Example
//!
//! ```rust,ignore
//! use hotcert::common::common::{setup_logging, generate_self_signed};
//!
//! setup_logging(&config)?;
//! generate_self_signed("example.org", "certs/tls.crt", "certs/tls.key", 365)?;
//! ```

/// Common data structures.
pub mod structs;

/// Core utility functions.
#[allow(clippy::module_inception)]
pub mod common;

/// Implementation blocks for common types.
pub mod impls;
