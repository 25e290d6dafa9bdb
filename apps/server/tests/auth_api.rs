mod common;

use common::{empty_request, json_request, response_json, test_app};
use serde_json::json;
use tower::ServiceExt;

fn register_body(email: &str) -> serde_json::Value {
    json!({
        "name": "Maria Silva",
        "email": email,
        "password": "s3cret-pass",
        "role": "admin"
    })
}

#[tokio::test]
async fn register_login_and_duplicate_email() {
    let (app, _tmp) = test_app().await;

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/auth/register",
            register_body("maria@example.org"),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), 201);
    let body = response_json(response).await;
    assert_eq!(body["user"]["email"], "maria@example.org");
    // The password hash must never appear on the wire.
    assert!(body["user"].get("passwordHash").is_none());
    assert!(body["user"].get("password").is_none());

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/auth/register",
            register_body("maria@example.org"),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), 409);

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/auth/login",
            json!({"email": "maria@example.org", "password": "s3cret-pass"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
    let body = response_json(response).await;
    assert_eq!(body["user"]["role"], "admin");

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/auth/login",
            json!({"email": "maria@example.org", "password": "wrong"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), 401);

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/auth/login",
            json!({"email": "nobody@example.org", "password": "s3cret-pass"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), 401);
}

#[tokio::test]
async fn the_last_user_cannot_be_deleted() {
    let (app, _tmp) = test_app().await;

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/auth/register",
            register_body("only@example.org"),
        ))
        .await
        .unwrap();
    let body = response_json(response).await;
    let user_id = body["user"]["id"].as_str().unwrap().to_string();

    let response = app
        .clone()
        .oneshot(empty_request(
            "DELETE",
            &format!("/api/auth/users/{user_id}"),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), 400);

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/auth/register",
            register_body("second@example.org"),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), 201);

    let response = app
        .clone()
        .oneshot(empty_request(
            "DELETE",
            &format!("/api/auth/users/{user_id}"),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
    let body = response_json(response).await;
    assert_eq!(body["ok"], json!(true));
}
