use std::fs::File;
use std::io::Write;
use std::net::SocketAddr;
use std::thread::available_parallelism;
use regex::Regex;
use crate::common::structs::custom_error::CustomError;
use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::structs::certificate_config::CertificateConfig;
use crate::config::structs::configuration::Configuration;
use crate::config::structs::server_config::ServerConfig;
use crate::ssl::impls::manager_options::{DEFAULT_EXPIRY_WARNING_DAYS, MAX_CHECK_INTERVAL_SECS};

const LOG_LEVEL_PATTERN: &str = r"^(off|trace|debug|info|warn|error)$";

impl Configuration {
    pub fn init() -> Configuration {
        Configuration {
            log_level: String::from("info"),
            certificate: CertificateConfig {
                cert_file: String::from("certs/tls.crt"),
                key_file: String::from("certs/tls.key"),
                ca_file: None,
                check_interval: 30,
                expiry_warning_days: DEFAULT_EXPIRY_WARNING_DAYS,
            },
            server: ServerConfig {
                enabled: true,
                bind_address: String::from("0.0.0.0:8443"),
                threads: Some(available_parallelism().map(|n| n.get() as u64).unwrap_or(1)),
            },
        }
    }

    pub fn load(data: &[u8]) -> Result<Configuration, toml::de::Error> {
        toml::from_str(&String::from_utf8_lossy(data))
    }

    pub fn load_file(path: &str) -> Result<Configuration, ConfigurationError> {
        match std::fs::read(path) {
            Err(e) => Err(ConfigurationError::IOError(e)),
            Ok(data) => Self::load(data.as_slice()).map_err(ConfigurationError::ParseError),
        }
    }

    pub fn save_file(path: &str, data: String) -> Result<(), ConfigurationError> {
        let mut file = File::create(path).map_err(ConfigurationError::IOError)?;
        file.write_all(data.as_ref()).map_err(ConfigurationError::IOError)
    }

    pub fn save_from_config(path: &str, config: &Configuration) -> Result<(), ConfigurationError> {
        let config_toml = toml::to_string(config).map_err(ConfigurationError::SerializeError)?;
        Self::save_file(path, config_toml)
    }

    /// Reads and validates `path`.
    ///
    /// When the file is missing or corrupt and `create` is set, a default
    /// configuration is written in its place; the caller is still handed an
    /// error so the operator can review the generated file before starting.
    pub fn load_from_file(path: &str, create: bool) -> Result<Configuration, CustomError> {
        let config = match Configuration::load_file(path) {
            Ok(config) => config,
            Err(error) => {
                eprintln!("No config file found or corrupt.");
                eprintln!("[ERROR] {}", error);

                if !create {
                    eprintln!("You can either create your own {} file, or start this app using '--create-config' as parameter.", path);
                    return Err(CustomError::new(&format!("will not create automatically {} file", path)));
                }
                eprintln!("Creating config file..");

                return match Configuration::save_from_config(path, &Configuration::init()) {
                    Ok(_) => {
                        eprintln!("Please edit {} and restart, exiting now...", path);
                        Err(CustomError::new(&format!("created {} file", path)))
                    }
                    Err(e) => {
                        eprintln!("{} file could not be created, check permissions...", path);
                        eprintln!("{e}");
                        Err(CustomError::new(&format!("could not create {} file", path)))
                    }
                };
            }
        };

        println!("[VALIDATE] Validating configuration...");
        config.validate().map_err(|e| CustomError::new(&e.to_string()))?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        Self::validate_value("log_level", &self.log_level, LOG_LEVEL_PATTERN)?;

        if self.certificate.cert_file.trim().is_empty() {
            return Err(ConfigurationError::ValidationError("[certificate] cert_file is empty".to_string()));
        }
        if self.certificate.key_file.trim().is_empty() {
            return Err(ConfigurationError::ValidationError("[certificate] key_file is empty".to_string()));
        }
        if let Some(ca_file) = &self.certificate.ca_file
            && ca_file.trim().is_empty()
        {
            return Err(ConfigurationError::ValidationError("[certificate] ca_file is empty".to_string()));
        }
        if self.certificate.check_interval == 0 {
            return Err(ConfigurationError::ValidationError("[certificate] check_interval must be greater than 0".to_string()));
        }
        if self.certificate.check_interval > MAX_CHECK_INTERVAL_SECS {
            return Err(ConfigurationError::ValidationError(format!(
                "[certificate] check_interval must not exceed {} seconds",
                MAX_CHECK_INTERVAL_SECS
            )));
        }
        if self.certificate.expiry_warning_days < 0 {
            return Err(ConfigurationError::ValidationError("[certificate] expiry_warning_days must not be negative".to_string()));
        }

        if self.server.threads == Some(0) {
            return Err(ConfigurationError::ValidationError("[server] threads must be greater than 0".to_string()));
        }
        if self.server.bind_address.parse::<SocketAddr>().is_err() {
            return Err(ConfigurationError::ValidationError(format!(
                "[server] bind_address \"{}\" is not a socket address",
                self.server.bind_address
            )));
        }
        Ok(())
    }

    pub fn validate_value(name: &str, value: &str, regex: &str) -> Result<(), ConfigurationError> {
        let regex_check = Regex::new(regex)
            .map_err(|e| ConfigurationError::ValidationError(format!("{}: {}", name, e)))?;
        if !regex_check.is_match(value) {
            return Err(ConfigurationError::ValidationError(format!(
                "Error checking {} [:] Value: \"{}\" [:] Regex: \"{}\"",
                name, value, regex_check
            )));
        }
        Ok(())
    }
}
