use crate::ssl::structs::certificate_paths::CertificatePaths;

impl CertificatePaths {
    pub fn new(cert_path: &str, key_path: &str) -> Self {
        Self {
            cert_path: cert_path.to_string(),
            key_path: key_path.to_string(),
            ca_path: None,
        }
    }

    pub fn with_ca(mut self, ca_path: &str) -> Self {
        self.ca_path = Some(ca_path.to_string());
        self
    }

    /// Every file whose modification marks a rotation.
    pub fn watched_files(&self) -> Vec<&str> {
        let mut files = vec![self.cert_path.as_str(), self.key_path.as_str()];
        if let Some(ca_path) = &self.ca_path {
            files.push(ca_path.as_str());
        }
        files
    }
}
