#![allow(dead_code)]
use hotcert::ssl::structs::certificate_manager::CertificateManager;
use hotcert::ssl::structs::certificate_paths::CertificatePaths;
use hotcert::stats::structs::certificate_stats::CertificateStats;
use rustls::pki_types::{CertificateDer, ServerName};
use rustls::{ClientConfig, ClientConnection, RootCertStore, ServerConfig, ServerConnection};
use rcgen::{BasicConstraints, CertificateParams, DistinguishedName, DnType, IsCa, Issuer, KeyPair};
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant, SystemTime};
use tempfile::TempDir;
use time::OffsetDateTime;

pub const MONITOR_INTERVAL: Duration = Duration::from_millis(100);
pub const WAIT_TIMEOUT: Duration = Duration::from_secs(10);

/// PEM encoded certificate and private key.
pub struct PemPair {
    pub cert: String,
    pub key: String,
}

pub struct TestCa {
    pub pem: String,
    issuer: Issuer<'static, KeyPair>,
}

/// Workspace with a certificate pair installed as `tls.crt`/`tls.key`.
pub struct TestFiles {
    pub dir: TempDir,
    pub cert_path: String,
    pub key_path: String,
}

pub fn create_temp_dir() -> TempDir {
    TempDir::new().expect("failed to create temp dir")
}

fn leaf_params(common_name: &str, from_days: i64, until_days: i64) -> CertificateParams {
    let mut params = CertificateParams::new(vec!["localhost".to_string()]).expect("valid SAN");
    let mut dn = DistinguishedName::new();
    dn.push(DnType::CommonName, common_name);
    params.distinguished_name = dn;
    let now = OffsetDateTime::now_utc();
    params.not_before = now + time::Duration::days(from_days);
    params.not_after = now + time::Duration::days(until_days);
    params
}

/// Self-signed pair valid from `from_days` to `until_days` relative to now.
pub fn generate_pair(common_name: &str, from_days: i64, until_days: i64) -> PemPair {
    let key = KeyPair::generate().expect("key generation");
    let cert = leaf_params(common_name, from_days, until_days)
        .self_signed(&key)
        .expect("self-signed certificate");
    PemPair {
        cert: cert.pem(),
        key: key.serialize_pem(),
    }
}

pub fn generate_valid_pair(common_name: &str) -> PemPair {
    generate_pair(common_name, -1, 90)
}

impl TestCa {
    pub fn new(name: &str) -> Self {
        let key = KeyPair::generate().expect("key generation");
        let mut params = CertificateParams::default();
        params.is_ca = IsCa::Ca(BasicConstraints::Unconstrained);
        let mut dn = DistinguishedName::new();
        dn.push(DnType::CommonName, name);
        params.distinguished_name = dn;
        let cert = params.self_signed(&key).expect("CA certificate");
        TestCa {
            pem: cert.pem(),
            issuer: Issuer::new(params, key),
        }
    }

    pub fn sign(&self, common_name: &str) -> PemPair {
        let key = KeyPair::generate().expect("key generation");
        let cert = leaf_params(common_name, -1, 90)
            .signed_by(&key, &self.issuer)
            .expect("signed certificate");
        PemPair {
            cert: cert.pem(),
            key: key.serialize_pem(),
        }
    }
}

pub fn path_string(path: PathBuf) -> String {
    path.to_string_lossy().to_string()
}

pub fn install_pair(pair: &PemPair) -> TestFiles {
    let dir = create_temp_dir();
    let cert_path = path_string(dir.path().join("tls.crt"));
    let key_path = path_string(dir.path().join("tls.key"));
    fs::write(&cert_path, &pair.cert).expect("write cert");
    fs::write(&key_path, &pair.key).expect("write key");
    TestFiles { dir, cert_path, key_path }
}

/// Timestamp `secs` seconds in the future, used to make a rotation visible
/// regardless of the filesystem's timestamp granularity.
pub fn future_time(secs: u64) -> SystemTime {
    SystemTime::now() + Duration::from_secs(secs)
}

pub fn set_mtime(path: &str, mtime: SystemTime) {
    fs::File::options()
        .write(true)
        .open(path)
        .expect("open for mtime")
        .set_modified(mtime)
        .expect("set mtime");
}

/// Writes `contents` beside `path` and renames it into place, so readers
/// never observe a half-written file.
pub fn replace_atomically(path: &str, contents: &str, mtime: SystemTime) {
    let staging = format!("{}.staging", path);
    fs::write(&staging, contents).expect("write staging file");
    set_mtime(&staging, mtime);
    fs::rename(&staging, path).expect("rename staging file");
}

/// Atomically rotates both files to `pair` with the given modification time.
pub fn rotate(files: &TestFiles, pair: &PemPair, mtime: SystemTime) {
    replace_atomically(&files.key_path, &pair.key, mtime);
    replace_atomically(&files.cert_path, &pair.cert, mtime);
}

pub fn create_manager(files: &TestFiles) -> (Arc<CertificateManager>, Arc<CertificateStats>) {
    create_manager_with_paths(CertificatePaths::new(&files.cert_path, &files.key_path))
}

pub fn create_manager_with_paths(paths: CertificatePaths) -> (Arc<CertificateManager>, Arc<CertificateStats>) {
    let stats = Arc::new(CertificateStats::new());
    let manager = Arc::new(CertificateManager::new(paths, stats.clone()));
    (manager, stats)
}

/// Polls `condition` until it holds or `WAIT_TIMEOUT` elapses.
pub async fn wait_until<F: Fn() -> bool>(condition: F) -> bool {
    let deadline = Instant::now() + WAIT_TIMEOUT;
    while Instant::now() < deadline {
        if condition() {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
    }
    condition()
}

pub async fn sleep_intervals(count: u32) {
    tokio::time::sleep(MONITOR_INTERVAL * count).await;
}

/// Runs a TLS handshake in memory against `server_config`, trusting the CA in
/// `ca_pem`, and returns the leaf certificate the server presented.
pub fn handshake_leaf(server_config: Arc<ServerConfig>, ca_pem: &str) -> CertificateDer<'static> {
    let mut roots = RootCertStore::empty();
    for cert in rustls_pemfile::certs(&mut ca_pem.as_bytes()) {
        roots.add(cert.expect("CA PEM")).expect("CA root");
    }
    let client_config = ClientConfig::builder_with_provider(Arc::new(rustls::crypto::ring::default_provider()))
        .with_safe_default_protocol_versions()
        .expect("protocol versions")
        .with_root_certificates(roots)
        .with_no_client_auth();
    let server_name = ServerName::try_from("localhost").expect("server name");
    let mut client = ClientConnection::new(Arc::new(client_config), server_name).expect("client connection");
    let mut server = ServerConnection::new(server_config).expect("server connection");

    for _ in 0..10 {
        if !client.is_handshaking() && !server.is_handshaking() {
            break;
        }
        let mut to_server = Vec::new();
        while client.wants_write() {
            client.write_tls(&mut to_server).expect("client write");
        }
        let mut pending = to_server.as_slice();
        while !pending.is_empty() {
            server.read_tls(&mut pending).expect("server read");
            server.process_new_packets().expect("server handshake");
        }

        let mut to_client = Vec::new();
        while server.wants_write() {
            server.write_tls(&mut to_client).expect("server write");
        }
        let mut pending = to_client.as_slice();
        while !pending.is_empty() {
            client.read_tls(&mut pending).expect("client read");
            client.process_new_packets().expect("client handshake");
        }
    }
    assert!(!client.is_handshaking(), "handshake did not complete");
    client.peer_certificates().expect("server certificates")[0].clone()
}
