use candidate_explorer::config::ExplorerConfig;
use candidate_explorer::error::AppError;
use candidate_explorer::explorer::{LabelLookup, LabelTables};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Built-in province and gender labels, extended by the configured file.
pub(crate) fn load_labels(config: &ExplorerConfig) -> Result<Arc<dyn LabelLookup>, AppError> {
    let tables = match &config.labels_path {
        Some(path) => {
            let tables = LabelTables::from_path(path)?;
            info!(path = %path.display(), entries = tables.len(), "label tables loaded");
            tables
        }
        None => LabelTables::builtin(),
    };
    Ok(Arc::new(tables))
}
