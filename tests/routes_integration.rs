//! HTTP API integration tests: routes, status mapping, response bodies.

#![cfg(feature = "http-server")]

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use tower::ServiceExt;

use kpi_engine::http::{create_router, AppState};
use kpi_engine::registry::get_registry;

fn test_router() -> Router {
    create_router(AppState::new(get_registry()))
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_health_check() {
    let response = test_router()
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert_eq!(json["kpi_count"], 9);
}

#[tokio::test]
async fn test_list_kpis_in_registry_order() {
    let response = test_router()
        .oneshot(Request::builder().uri("/v1/kpis").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["total"], 9);
    assert_eq!(json["kpis"][0]["id"], "mtbf");
    assert_eq!(json["kpis"][3]["id"], "oee");
    assert_eq!(json["kpis"][8]["id"], "quality-rate");
}

#[tokio::test]
async fn test_get_kpi_definition() {
    let response = test_router()
        .oneshot(Request::builder().uri("/v1/kpis/oee").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["id"], "oee");
    assert_eq!(json["unit"], "%");
    let inputs = json["inputs"].as_array().unwrap();
    assert_eq!(inputs.len(), 3);
    assert_eq!(inputs[0]["id"], "availability");
}

#[tokio::test]
async fn test_get_unknown_kpi_is_404() {
    let response = test_router()
        .oneshot(Request::builder().uri("/v1/kpis/nope").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
}

fn evaluate_request(id: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(format!("/v1/kpis/{}/evaluate", id))
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_evaluate_mtbf() {
    let body = serde_json::json!({
        "inputs": { "operatingTime": "1000", "failures": "4" }
    });
    let response = test_router().oneshot(evaluate_request("mtbf", body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["value"], 250.0);
    assert_eq!(json["formatted_value"], "250");
    assert_eq!(json["unit"], "ore");
}

#[tokio::test]
async fn test_evaluate_missing_input_is_422() {
    let body = serde_json::json!({ "inputs": { "operatingTime": "1000" } });
    let response = test_router().oneshot(evaluate_request("mtbf", body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let json = body_json(response).await;
    assert_eq!(json["code"], "MISSING_INPUT");
    assert_eq!(json["message"], "Per favore compila tutti i campi richiesti.");
}

#[tokio::test]
async fn test_evaluate_division_by_zero_is_422() {
    let body = serde_json::json!({
        "inputs": { "operatingTime": "1000", "failures": "0" }
    });
    let response = test_router().oneshot(evaluate_request("mtbf", body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let json = body_json(response).await;
    assert_eq!(json["code"], "INVALID_CALCULATION");
}

#[tokio::test]
async fn test_malformed_body_is_rejected_by_extractor() {
    // axum's Json extractor owns malformed-body rejection; handlers never
    // see such requests
    let request = Request::builder()
        .method("POST")
        .uri("/v1/kpis/mtbf/evaluate")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{ not json"))
        .unwrap();
    let response = test_router().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_evaluate_unknown_kpi_is_404() {
    let body = serde_json::json!({ "inputs": {} });
    let response = test_router().oneshot(evaluate_request("nope", body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
