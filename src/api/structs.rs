//! Data structures for the status API module.

/// Shared data context for API request handlers.
pub mod api_service_data;

/// Response bodies of the certificate endpoints.
pub mod api_certificate;
