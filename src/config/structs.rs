//! Configuration data structures.
//!
//! Each struct corresponds to a section in the TOML configuration file.

/// Root configuration structure containing all settings.
pub mod configuration;

/// Managed certificate paths and monitoring cadence.
pub mod certificate_config;

/// HTTPS status server settings.
pub mod server_config;
