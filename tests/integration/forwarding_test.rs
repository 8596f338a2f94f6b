use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::json;

use super::common::{call, closed_origin, http_router, spawn_backend};

#[test_log::test(tokio::test)]
async fn test_round_trip_to_billing_backend() {
    let backend = spawn_backend().await;
    let app = http_router(backend.clone(), backend);

    let response = call(
        app,
        Request::get("/api/organizations/acme/invoices?limit=10")
            .header("authorization", "Bearer abc")
            .header("cookie", "session=xyz")
            .body(Body::empty())
            .unwrap(),
    )
    .await;

    assert_eq!(response.status, StatusCode::OK);
    response.assert_cors();
    assert_eq!(
        response.json(),
        json!({
            "method": "GET",
            "path": "/api/v1/organizations/acme/invoices",
            "query": "limit=10",
            "content_type": "application/json",
            "authorization": "Bearer abc",
            "api_key": null,
            "cookie": null,
            "accept_encoding": null,
            "body": "",
        })
    );
}

#[tokio::test]
async fn test_post_body_reaches_backend() {
    let backend = spawn_backend().await;
    let app = http_router(backend.clone(), backend);

    let response = call(
        app,
        Request::post("/api/namespaces")
            .header("x-api-key", "oke_test_key")
            .header("content-type", "application/json")
            .body(Body::from(r#"{"name":"payments-prod","region":"us-east-1"}"#))
            .unwrap(),
    )
    .await;

    let echoed = response.json();
    assert_eq!(echoed["method"], "POST");
    assert_eq!(echoed["path"], "/api/v1/namespaces");
    assert_eq!(echoed["api_key"], "oke_test_key");
    assert_eq!(echoed["authorization"], json!(null));
    assert_eq!(echoed["body"], r#"{"name":"payments-prod","region":"us-east-1"}"#);
}

#[tokio::test]
async fn test_ui_prefix_round_trip() {
    let billing = closed_origin().await;
    let ui = spawn_backend().await;
    let app = http_router(billing, ui);

    let response = call(
        app,
        Request::get("/temporal/namespaces/default/workflows")
            .body(Body::empty())
            .unwrap(),
    )
    .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json()["path"], "/namespaces/default/workflows");
    assert_eq!(response.json()["query"], json!(null));
}

#[tokio::test]
async fn test_backend_error_status_passes_through() {
    let backend = spawn_backend().await;
    let app = http_router(backend.clone(), backend);

    let response = call(
        app,
        Request::get("/api/missing").body(Body::empty()).unwrap(),
    )
    .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.json(), json!({ "error": "organization not found" }));
    assert_eq!(response.header("x-backend"), Some("billing"));
    response.assert_cors();
}

#[test_log::test(tokio::test)]
async fn test_unreachable_backend_is_502() {
    let origin = closed_origin().await;
    let app = http_router(origin.clone(), origin);

    let response = call(
        app,
        Request::get("/api/health").body(Body::empty()).unwrap(),
    )
    .await;

    assert_eq!(response.status, StatusCode::BAD_GATEWAY);
    response.assert_cors();
    let body = response.json();
    assert_eq!(body["error"], "Backend unavailable");
    assert!(
        body["details"].as_str().is_some_and(|details| !details.is_empty()),
        "details should describe the transport error: {}",
        body
    );
}
