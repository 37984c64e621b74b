/// Loading, saving and validation of the root configuration.
pub mod configuration;

pub mod configuration_error;
