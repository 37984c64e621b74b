/// Errors raised while reading, writing or validating `config.toml`.
pub mod configuration_error;
