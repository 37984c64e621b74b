//! Certificate management enumerations.

/// Error taxonomy for loading, validating and monitoring certificates.
pub mod certificate_error;

/// Lifecycle states of the background monitor (`Idle`, `Running`, `Stopped`).
pub mod monitor_state;
