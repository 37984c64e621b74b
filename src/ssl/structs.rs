//! Certificate management data structures.

/// Validated chain + key shared with TLS handshakes.
pub mod certificate_material;

/// Parsed identity and validity window of a leaf certificate.
pub mod leaf_metadata;

/// Serializable health snapshot of a certificate.
pub mod certificate_info;

/// Certificate, key and optional CA bundle locations.
pub mod certificate_paths;

/// Tunables of a certificate manager.
pub mod manager_options;

/// Concurrency-safe holder of the active material.
pub mod certificate_store;

/// Optional verification of the chain against a CA bundle.
pub mod chain_verifier;

/// Manager orchestrating load, monitoring and reload notification.
pub mod certificate_manager;

/// rustls resolver serving the manager's current certificate.
pub mod dynamic_certificate_resolver;
