//! HTTP surface tests driving the router in-process.

mod common;

use axum::body::{Body, Bytes};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tempfile::TempDir;
use tower::ServiceExt;

use docstore::adapters::http::router;
use docstore::domain::models::Config;
use docstore::infrastructure::setup::build_document_service;

async fn setup() -> (TempDir, Router) {
    let dir = common::temp_dir();
    let mut config = Config::default();
    config.storage.root = dir.path().to_path_buf();
    let service = build_document_service(&config).await.unwrap();
    (dir, router(service, false))
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Option<String>, Bytes) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, content_type, body)
}

fn json_request(method: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri("/documents")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get_request(id: &str, accept: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().uri(format!("/documents/{id}"));
    if let Some(accept) = accept {
        builder = builder.header(header::ACCEPT, accept);
    }
    builder.body(Body::empty()).unwrap()
}

#[tokio::test]
async fn test_health() {
    let (_dir, app) = setup().await;
    let request = Request::builder().uri("/health").body(Body::empty()).unwrap();

    let (status, _, body) = send(&app, request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(&body[..], b"OK");
}

#[tokio::test]
async fn test_create_then_get_json() {
    let (_dir, app) = setup().await;
    let document = json!({"id": "a", "tags": ["t1"], "data": {"z": 1, "a": [true, null]}});

    let (status, _, _) = send(&app, json_request("POST", &document)).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, content_type, body) = send(&app, get_request("a", None)).await;
    assert_eq!(status, StatusCode::OK);
    assert!(content_type.unwrap().starts_with("application/json"));
    assert_eq!(
        String::from_utf8(body.to_vec()).unwrap(),
        r#"{"id":"a","tags":["t1"],"data":{"z":1,"a":[true,null]}}"#
    );
}

#[tokio::test]
async fn test_create_duplicate_is_bad_request() {
    let (_dir, app) = setup().await;
    let document = json!({"id": "a"});
    send(&app, json_request("POST", &document)).await;

    let (status, _, body) = send(&app, json_request("POST", &document)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let body: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(
        body,
        json!({
            "statusCode": 400,
            "message": "Document was not persisted. Document with id (a) already exists."
        })
    );
}

#[tokio::test]
async fn test_update() {
    let (_dir, app) = setup().await;

    let (status, _, body) = send(&app, json_request("PUT", &json!({"id": "a"}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let body: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(
        body["message"],
        "Document was not updated. Document with id (a) does not exist."
    );

    send(&app, json_request("POST", &json!({"id": "a", "tags": ["old"]}))).await;
    let (status, _, _) = send(&app, json_request("PUT", &json!({"id": "a", "tags": ["new"]}))).await;
    assert_eq!(status, StatusCode::OK);

    let (_, _, body) = send(&app, get_request("a", None)).await;
    let body: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["tags"], json!(["new"]));
}

#[tokio::test]
async fn test_get_missing_is_not_found() {
    let (_dir, app) = setup().await;

    let (status, _, body) = send(&app, get_request("nope", None)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let body: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(
        body,
        json!({
            "statusCode": 404,
            "message": "Document was not found. Document with id (nope) does not exist."
        })
    );
}

#[tokio::test]
async fn test_get_as_xml() {
    let (_dir, app) = setup().await;
    let document = json!({"id": "a", "tags": ["t1"], "data": {"x": 1}});
    send(&app, json_request("POST", &document)).await;

    let (status, content_type, body) = send(&app, get_request("a", Some("application/xml"))).await;
    assert_eq!(status, StatusCode::OK);
    assert!(content_type.unwrap().starts_with("application/xml"));
    let body = String::from_utf8(body.to_vec()).unwrap();
    assert!(body.contains("<document><id>a</id><tags><tag>t1</tag></tags><data><x>1</x></data></document>"));
}

#[tokio::test]
async fn test_invalid_id_is_bad_request() {
    let (_dir, app) = setup().await;

    let (status, _, body) = send(&app, json_request("POST", &json!({"id": ".."}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let body: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["statusCode"], 400);
}

#[tokio::test]
async fn test_malformed_body_is_bad_request() {
    let (_dir, app) = setup().await;
    let request = Request::builder()
        .method("POST")
        .uri("/documents")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();

    let (status, content_type, body) = send(&app, request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(content_type.unwrap().starts_with("application/json"));
    let body: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["statusCode"], 400);
    assert!(body["message"].is_string());
}

#[tokio::test]
async fn test_body_without_id_is_bad_request() {
    let (_dir, app) = setup().await;

    for method in ["POST", "PUT"] {
        let (status, _, body) = send(&app, json_request(method, &json!({"tags": ["t"]}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{method}");
        let body: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(body["statusCode"], 400);
        assert!(body["message"].as_str().unwrap().contains("id"));
    }
}

#[tokio::test]
async fn test_missing_content_type_is_bad_request() {
    let (_dir, app) = setup().await;
    let request = Request::builder()
        .method("POST")
        .uri("/documents")
        .body(Body::from(r#"{"id":"a"}"#))
        .unwrap();

    let (status, _, body) = send(&app, request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let body: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["statusCode"], 400);
}

#[tokio::test]
async fn test_storage_failure_is_internal_error() {
    let (dir, app) = setup().await;
    std::fs::remove_dir_all(dir.path().join("DocumentStorage")).unwrap();

    let (status, _, body) = send(&app, json_request("POST", &json!({"id": "a"}))).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body, json!({"statusCode": 500}));
}
