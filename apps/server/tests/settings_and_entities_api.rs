mod common;

use common::{empty_request, json_request, response_json, test_app};
use serde_json::json;
use tower::ServiceExt;

#[tokio::test]
async fn settings_merge_and_unknown_key_rejection() {
    let (app, _tmp) = test_app().await;

    let response = app
        .clone()
        .oneshot(empty_request("GET", "/api/settings"))
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
    let defaults = response_json(response).await;
    assert_eq!(defaults["availableBalance"], json!(0.0));
    assert_eq!(defaults["theme"], "light");

    let response = app
        .clone()
        .oneshot(json_request(
            "PUT",
            "/api/settings",
            json!({"availableBalance": 1500.5, "headerText": "Prefeitura Municipal"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), 200);

    // Partial merges leave other keys untouched.
    let response = app
        .clone()
        .oneshot(json_request("PUT", "/api/settings", json!({"theme": "dark"})))
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
    let merged = response_json(response).await;
    assert_eq!(merged["availableBalance"], json!(1500.5));
    assert_eq!(merged["headerText"], "Prefeitura Municipal");
    assert_eq!(merged["theme"], "dark");

    let response = app
        .clone()
        .oneshot(json_request(
            "PUT",
            "/api/settings",
            json!({"someUnknownKey": "value"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), 400);
}

#[tokio::test]
async fn organization_profile_is_a_singleton() {
    let (app, _tmp) = test_app().await;

    let profile = json!({"name": "City Hall", "fullName": "City Hall of Example"});
    let response = app
        .clone()
        .oneshot(json_request("POST", "/api/entities", profile.clone()))
        .await
        .unwrap();
    assert_eq!(response.status(), 201);

    let response = app
        .clone()
        .oneshot(json_request("POST", "/api/entities", profile))
        .await
        .unwrap();
    assert_eq!(response.status(), 409);
}

#[tokio::test]
async fn oversized_profile_images_are_rejected_with_413() {
    let (app, _tmp) = test_app().await;

    let profile = json!({
        "name": "City Hall",
        "fullName": "City Hall of Example",
        "logoUrl": "x".repeat(950_000)
    });
    let response = app
        .clone()
        .oneshot(json_request("POST", "/api/entities", profile))
        .await
        .unwrap();
    assert_eq!(response.status(), 413);
}
