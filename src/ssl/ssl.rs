use crate::ssl::enums::certificate_error::CertificateError;
use crate::ssl::structs::dynamic_certificate_resolver::DynamicCertificateResolver;
use rustls::pki_types::{CertificateDer, PrivateKeyDer};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::sync::Arc;
use std::time::SystemTime;

/// TLS server configuration whose identity is looked up per handshake.
pub fn create_server_config_with_resolver(
    resolver: Arc<DynamicCertificateResolver>,
) -> Result<rustls::ServerConfig, rustls::Error> {
    Ok(rustls::ServerConfig::builder_with_provider(Arc::new(rustls::crypto::ring::default_provider()))
        .with_safe_default_protocol_versions()?
        .with_no_client_auth()
        .with_cert_resolver(resolver))
}

pub fn map_io_error(path: &str, error: std::io::Error) -> CertificateError {
    match error.kind() {
        std::io::ErrorKind::NotFound => CertificateError::FileNotFound(path.to_string()),
        std::io::ErrorKind::PermissionDenied => CertificateError::PermissionDenied(path.to_string()),
        _ => CertificateError::FileAccess(format!("{}: {}", path, error)),
    }
}

/// Requires `path` to name an existing regular file (symlinks are followed).
pub fn check_regular_file(path: &str) -> Result<std::fs::Metadata, CertificateError> {
    let metadata = std::fs::metadata(Path::new(path)).map_err(|e| map_io_error(path, e))?;
    if metadata.is_dir() {
        return Err(CertificateError::IsDirectory(path.to_string()));
    }
    if !metadata.is_file() {
        return Err(CertificateError::FileAccess(format!("{}: not a regular file", path)));
    }
    Ok(metadata)
}

pub fn file_modified_time(path: &str) -> Result<SystemTime, CertificateError> {
    check_regular_file(path)?
        .modified()
        .map_err(|e| map_io_error(path, e))
}

/// Newest modification time across all given files.
///
/// A rotation touching any one of the files advances the result, so the
/// certificate, key and CA bundle are treated as a single unit.
pub fn newest_modified_time(paths: &[&str]) -> Result<SystemTime, CertificateError> {
    let mut newest = SystemTime::UNIX_EPOCH;
    for path in paths {
        let modified = file_modified_time(path)?;
        if modified > newest {
            newest = modified;
        }
    }
    Ok(newest)
}

pub fn read_certificates(path: &str) -> Result<Vec<CertificateDer<'static>>, CertificateError> {
    let file = File::open(path).map_err(|e| map_io_error(path, e))?;
    let mut reader = BufReader::new(file);
    let certs: Vec<CertificateDer<'static>> = rustls_pemfile::certs(&mut reader)
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| CertificateError::ParseError(format!("{}: {}", path, e)))?;
    if certs.is_empty() {
        return Err(CertificateError::ParseError(format!(
            "{}: no certificates found in file",
            path
        )));
    }
    Ok(certs)
}

pub fn read_private_key(path: &str) -> Result<PrivateKeyDer<'static>, CertificateError> {
    let file = File::open(path).map_err(|e| map_io_error(path, e))?;
    let mut reader = BufReader::new(file);
    rustls_pemfile::private_key(&mut reader)
        .map_err(|e| CertificateError::ParseError(format!("{}: {}", path, e)))?
        .ok_or_else(|| CertificateError::ParseError(format!("{}: no private key found in file", path)))
}
