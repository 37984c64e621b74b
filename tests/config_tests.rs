mod common;

use hotcert::config::structs::configuration::Configuration;
use hotcert::ssl::structs::certificate_paths::CertificatePaths;
use std::fs;
use std::time::Duration;

#[test]
fn test_config_drives_manager() {
    let files = common::install_pair(&common::generate_valid_pair("configured.localhost"));
    let config_path = common::path_string(files.dir.path().join("config.toml"));
    let config_content = format!(
        r#"
log_level = "warn"

[certificate]
cert_file = "{}"
key_file = "{}"
check_interval = 5

[server]
enabled = false
bind_address = "127.0.0.1:0"
"#,
        files.cert_path, files.key_path
    );
    fs::write(&config_path, config_content).unwrap();

    let config = Configuration::load_from_file(&config_path, false).unwrap();
    assert_eq!(config.certificate.expiry_warning_days, 30);
    assert!(config.server.threads.is_none());
    assert_eq!(Duration::from_secs(config.certificate.check_interval), Duration::from_secs(5));

    let paths = CertificatePaths::new(&config.certificate.cert_file, &config.certificate.key_file);
    let (manager, _) = common::create_manager_with_paths(paths);
    assert!(manager.load_certificate().is_ok());
}

#[test]
fn test_config_rejects_invalid_file() {
    let dir = common::create_temp_dir();
    let config_path = common::path_string(dir.path().join("config.toml"));
    let mut config = Configuration::init();
    config.certificate.check_interval = 0;
    Configuration::save_from_config(&config_path, &config).unwrap();

    assert!(Configuration::load_from_file(&config_path, false).is_err());
}

#[test]
fn test_config_corrupt_file_is_replaced_on_request() {
    let dir = common::create_temp_dir();
    let config_path = common::path_string(dir.path().join("config.toml"));
    fs::write(&config_path, "this is [not toml").unwrap();

    assert!(Configuration::load_from_file(&config_path, false).is_err());
    assert_eq!(fs::read_to_string(&config_path).unwrap(), "this is [not toml");

    assert!(Configuration::load_from_file(&config_path, true).is_err());
    assert!(Configuration::load_from_file(&config_path, false).is_ok());
}
