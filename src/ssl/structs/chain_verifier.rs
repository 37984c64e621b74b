#[derive(Debug, Clone, Default)]
pub struct ChainVerifier {
    pub(crate) ca_path: Option<String>,
}
