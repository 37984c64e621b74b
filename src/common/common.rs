use std::fs;
use std::path::Path;
use fern::colors::{Color, ColoredLevelConfig};
use log::{error, info};
use rcgen::{CertificateParams, DistinguishedName, DnType, KeyPair};
use time::{Duration, OffsetDateTime};
use crate::common::structs::custom_error::CustomError;
use crate::config::structs::configuration::Configuration;

pub fn parse_log_level(level: &str) -> Option<log::LevelFilter> {
    match level {
        "off" => Some(log::LevelFilter::Off),
        "trace" => Some(log::LevelFilter::Trace),
        "debug" => Some(log::LevelFilter::Debug),
        "info" => Some(log::LevelFilter::Info),
        "warn" => Some(log::LevelFilter::Warn),
        "error" => Some(log::LevelFilter::Error),
        _ => None,
    }
}

pub fn setup_logging(config: &Configuration) -> Result<(), CustomError>
{
    let level = parse_log_level(config.log_level.as_str()).ok_or_else(|| {
        CustomError::new(&format!("Unknown log level encountered: '{}'", config.log_level))
    })?;

    let colors = ColoredLevelConfig::new()
        .trace(Color::Cyan)
        .debug(Color::Magenta)
        .info(Color::Green)
        .warn(Color::Yellow)
        .error(Color::Red);

    fern::Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "{} [{:width$}][{}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.9f"),
                colors.color(record.level()),
                record.target(),
                message,
                width = 5
            ))
        })
        .level(level)
        .chain(std::io::stdout())
        .apply()
        .map_err(|e| CustomError::new(&format!("Failed to initialize logging: {}", e)))?;
    info!("logging initialized.");
    Ok(())
}

/// Subject alternative names for a development certificate: always
/// `localhost`, plus `domain` when it differs.
pub fn self_signed_names(domain: &str) -> Vec<String> {
    let mut subject_alt_names = vec![String::from("localhost")];
    if domain != "localhost" && !domain.is_empty() {
        subject_alt_names.push(domain.to_string());
    }
    subject_alt_names
}

/// Writes a self-signed key and certificate pair valid from now for `days`.
pub fn generate_self_signed(domain: &str, cert_file: &str, key_file: &str, days: u32) -> Result<(), CustomError>
{
    info!("[CERTGEN] Requesting to generate a self-signed key and certificate file");
    if days == 0 {
        return Err(CustomError::new("[CERTGEN] validity must be at least one day"));
    }

    let mut params = CertificateParams::new(self_signed_names(domain))
        .map_err(|e| CustomError::new(&format!("[CERTGEN] {}", e)))?;
    let mut distinguished_name = DistinguishedName::new();
    distinguished_name.push(DnType::CommonName, domain);
    params.distinguished_name = distinguished_name;
    let now = OffsetDateTime::now_utc();
    params.not_before = now - Duration::minutes(5);
    params.not_after = now + Duration::days(i64::from(days));

    let key_pair = KeyPair::generate().map_err(|e| CustomError::new(&format!("[CERTGEN] {}", e)))?;
    let cert = params.self_signed(&key_pair).map_err(|e| CustomError::new(&format!("[CERTGEN] {}", e)))?;

    write_pem(key_file, "key", key_pair.serialize_pem())?;
    write_pem(cert_file, "cert", cert.pem())?;

    info!("[CERTGEN] The files {} and {} have been generated, use them only for development reasons", key_file, cert_file);
    Ok(())
}

fn write_pem(path: &str, kind: &str, pem: String) -> Result<(), CustomError>
{
    if let Some(parent) = Path::new(path).parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|e| CustomError::new(&format!("[CERTGEN] {}: {}", parent.display(), e)))?;
    }
    match fs::write(path, pem) {
        Ok(_) => {
            info!("[CERTGEN] The {} file {} has been generated", kind, path);
            Ok(())
        }
        Err(e) => {
            error!("[CERTGEN] The {} file {} could not be generated!", kind, path);
            Err(CustomError::new(&format!("[CERTGEN] {}", e)))
        }
    }
}
