#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tempfile::TempDir;

use fiscus_server::api::app_router;
use fiscus_server::config::Config;
use fiscus_server::main_lib::build_state;

/// Build a router backed by a throwaway database. The TempDir must outlive
/// the test.
pub async fn test_app() -> (Router, TempDir) {
    let tmp = TempDir::new().expect("tempdir");
    let config = Config {
        listen_addr: "127.0.0.1:0".to_string(),
        db_path: tmp
            .path()
            .join("test.db")
            .to_string_lossy()
            .to_string(),
        allowed_origins: None,
    };
    let state = build_state(&config).await.expect("state");
    (app_router(state, &config), tmp)
}

pub fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(&body).expect("body")))
        .expect("request")
}

pub fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .expect("request")
}

pub async fn response_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("json body")
}
