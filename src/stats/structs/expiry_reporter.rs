use crate::stats::traits::metrics_sink::MetricsSink;
use std::sync::Arc;

pub struct ExpiryReporter {
    pub(crate) cert_file: String,
    pub(crate) sink: Arc<dyn MetricsSink>,
}
