//! Configuration management module.
//!
//! Loads, parses and validates `config.toml`.
//!
//! # Configuration Structure
//!
//! - **log_level**: `off`, `trace`, `debug`, `info`, `warn` or `error`
//! - **certificate**: managed certificate, key and optional CA bundle paths,
//!   monitoring interval and the soft expiry warning threshold
//! - **server**: HTTPS status API served with the managed certificate
//!
//! # Example
//!
//! ```rust,ignore
//! use hotcert::config::structs::configuration::Configuration;
//!
//! let config = Configuration::load_from_file("config.toml", false)?;
//!
//! let default_config = Configuration::init();
//! Configuration::save_from_config("config.toml", &default_config)?;
//! ```

/// Configuration enumerations.
pub mod enums;

/// Configuration data structures.
pub mod structs;

/// Implementation blocks for configuration loading/saving.
pub mod impls;
