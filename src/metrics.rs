use std::path::Path;

use metrics_exporter_prometheus::{BuildError, PrometheusBuilder, PrometheusHandle};

/// Installs the global Prometheus recorder. The handle renders a snapshot in
/// text exposition format once the run is over.
pub fn install_recorder() -> Result<PrometheusHandle, BuildError> {
    PrometheusBuilder::new().install_recorder()
}

/// Writes the current snapshot to `path`, for textfile collectors.
pub async fn write_snapshot(handle: &PrometheusHandle, path: &Path) -> std::io::Result<()> {
    tokio::fs::write(path, handle.render()).await
}

pub fn increment_rows_created() {
    metrics::counter!("ganado_import_rows_total", "outcome" => "created").increment(1);
}

pub fn increment_rows_failed(kind: &'static str) {
    metrics::counter!("ganado_import_rows_total", "outcome" => "error").increment(1);
    metrics::counter!("ganado_import_row_errors_total", "kind" => kind).increment(1);
}

pub fn increment_owners_created() {
    metrics::counter!("ganado_import_owners_created_total").increment(1);
}

pub fn increment_stables_created() {
    metrics::counter!("ganado_import_stables_created_total").increment(1);
}

pub fn set_participants(contest: &str, count: usize) {
    metrics::gauge!("ganado_import_participants", "contest" => contest.to_string()).set(count as f64);
}

pub fn record_fetch_bytes(bytes: usize) {
    metrics::histogram!("ganado_import_csv_bytes").record(bytes as f64);
}
