use std::sync::Arc;

use axum::body::Body;
use axum::extract::{Path, Query, State};
use axum::http::{header, Request, StatusCode};
use serde_json::{json, Value};
use tower::ServiceExt;

use super::common::*;
use crate::config::ExplorerConfig;
use crate::explorer::labels::LabelTables;
use crate::explorer::router::{self, explorer_router};
use crate::explorer::service::ExplorerService;

fn router() -> axum::Router {
    explorer_router(Arc::new(service()))
}

fn post_view(payload: Value) -> Request<Body> {
    Request::post("/api/v1/explorer/view")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(&payload).expect("serialize payload")))
        .expect("request builds")
}

#[tokio::test]
async fn status_reports_loaded_dataset() {
    let response = router()
        .oneshot(
            Request::get("/api/v1/explorer/status")
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["state"], "ready");
    assert_eq!(payload["candidates"], 7);
}

#[tokio::test]
async fn status_handler_reports_loading_before_install() {
    let service = Arc::new(ExplorerService::new(
        Arc::new(LabelTables::builtin()),
        ExplorerConfig::default(),
    ));

    let response = router::status_handler(State(service)).await;

    let payload = read_json_body(response).await;
    assert_eq!(payload["state"], "loading");
    assert_eq!(payload["candidates"], 0);
    assert!(payload["loaded_at"].is_null());
}

#[tokio::test]
async fn view_applies_filters_and_comparison() {
    let response = router()
        .oneshot(post_view(json!({
            "province": KOSHI,
            "district": "all",
            "compare": [1, 6],
        })))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["load_state"]["state"], "ready");
    assert_eq!(payload["selection"]["province"], KOSHI);
    assert_eq!(payload["selection"]["district"], "all");
    assert_eq!(payload["results"]["total_items"], 2);
    assert_eq!(payload["results"]["current_page"], 1);
    assert_eq!(payload["comparison"].as_array().map(Vec::len), Some(2));
    assert_eq!(payload["compare_full"], false);
    assert_eq!(payload["summary"]["by_age_bracket"].as_array().map(Vec::len), Some(5));
}

#[tokio::test]
async fn view_with_empty_body_uses_defaults() {
    let response = router()
        .oneshot(post_view(json!({ "language": "en" })))
        .await
        .expect("route executes");

    let payload = read_json_body(response).await;
    assert_eq!(payload["language"], "english");
    assert_eq!(payload["selection"]["province"], PROVINCE);
    assert_eq!(payload["results"]["items"][0]["name"], "Ram Thapa");
    assert_eq!(payload["results"]["items"][0]["province"], "Bagmati Province");
    assert_eq!(payload["options"]["sorts"][0]["value"], "education_age");
}

#[tokio::test]
async fn options_follow_query_parameters() {
    let uri = format!(
        "/api/v1/explorer/options?province={}&district={}",
        encode_query_value(KOSHI),
        encode_query_value("झापा"),
    );

    let response = router()
        .oneshot(Request::get(uri).body(Body::empty()).expect("request builds"))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    let areas: Vec<&str> = payload["areas"]
        .as_array()
        .expect("areas array")
        .iter()
        .filter_map(|entry| entry["value"].as_str())
        .collect();
    assert_eq!(areas, vec!["1", "3"]);
}

#[tokio::test]
async fn candidate_lookup_returns_detail() {
    let response = router()
        .oneshot(
            Request::get("/api/v1/explorer/candidates/1?language=en")
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["id"], 1);
    assert_eq!(payload["name"], "Ram Thapa");
    assert_eq!(payload["party"], "Nepali Congress");
    assert_eq!(payload["qualification"], "स्नातकोत्तर");
}

#[tokio::test]
async fn unknown_candidate_is_not_found() {
    let response = router::candidate_handler(
        State(Arc::new(service())),
        Path(999),
        Query(Default::default()),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let payload = read_json_body(response).await;
    assert_eq!(payload["error"], "candidate 999 not found");
}
