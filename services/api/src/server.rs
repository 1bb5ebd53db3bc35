use crate::cli::ServeArgs;
use crate::infra::{load_labels, AppState};
use crate::routes::with_explorer_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use candidate_explorer::config::AppConfig;
use candidate_explorer::error::AppError;
use candidate_explorer::explorer::{DatasetStore, ExplorerService};
use candidate_explorer::telemetry;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }
    if let Some(dataset) = args.dataset.take() {
        config.explorer.dataset_path = dataset;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let labels = load_labels(&config.explorer)?;
    let explorer_service = Arc::new(ExplorerService::new(labels, config.explorer.clone()));

    let app = with_explorer_routes(explorer_service.clone())
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;

    let dataset_path = config.explorer.dataset_path.clone();
    tokio::spawn(async move {
        let store = DatasetStore::fetch(&dataset_path).await;
        explorer_service.install(store);
        readiness_flag.store(true, Ordering::Release);
    });

    info!(?config.environment, %addr, "candidate explorer listening");

    axum::serve(listener, app).await?;
    Ok(())
}
