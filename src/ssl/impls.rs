//! Implementation blocks for certificate management types.

pub mod certificate_error;
pub mod certificate_info;
pub mod certificate_manager;
pub mod certificate_material;
pub mod certificate_paths;
pub mod certificate_store;
pub mod chain_verifier;
pub mod dynamic_certificate_resolver;
pub mod leaf_metadata;
pub mod manager_options;
pub mod monitor_state;
