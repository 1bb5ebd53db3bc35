use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;

use super::domain::CandidateId;
use super::service::{ExplorerRequest, ExplorerService, OptionsQuery};

#[derive(Debug, Default, Deserialize)]
pub(crate) struct LanguageQuery {
    language: Option<String>,
}

/// Router builder exposing the explorer over HTTP.
pub fn explorer_router(service: Arc<ExplorerService>) -> Router {
    Router::new()
        .route("/api/v1/explorer/status", get(status_handler))
        .route("/api/v1/explorer/view", post(view_handler))
        .route("/api/v1/explorer/options", get(options_handler))
        .route("/api/v1/explorer/candidates/:candidate_id", get(candidate_handler))
        .with_state(service)
}

pub(crate) async fn status_handler(State(service): State<Arc<ExplorerService>>) -> Response {
    (StatusCode::OK, Json(service.status())).into_response()
}

pub(crate) async fn view_handler(
    State(service): State<Arc<ExplorerService>>,
    Json(request): Json<ExplorerRequest>,
) -> Response {
    (StatusCode::OK, Json(service.view(&request))).into_response()
}

pub(crate) async fn options_handler(
    State(service): State<Arc<ExplorerService>>,
    Query(query): Query<OptionsQuery>,
) -> Response {
    (StatusCode::OK, Json(service.options(query))).into_response()
}

pub(crate) async fn candidate_handler(
    State(service): State<Arc<ExplorerService>>,
    Path(candidate_id): Path<u64>,
    Query(query): Query<LanguageQuery>,
) -> Response {
    let id = CandidateId(candidate_id);
    match service.candidate(id, query.language.as_deref()) {
        Some(detail) => (StatusCode::OK, Json(detail)).into_response(),
        None => {
            let payload = json!({
                "error": format!("candidate {id} not found"),
            });
            (StatusCode::NOT_FOUND, Json(payload)).into_response()
        }
    }
}
