mod common;

use common::{empty_request, json_request, response_json, test_app};
use serde_json::json;
use tower::ServiceExt;

fn sample_contract() -> serde_json::Value {
    json!({
        "number": "012/2026",
        "description": "office supplies",
        "status": "active",
        "startDate": "2026-01-01",
        "endDate": "2026-12-31",
        "items": [
            {"description": "A4 paper", "unit": "rm", "quantity": 10, "unitPrice": 5}
        ]
    })
}

#[tokio::test]
async fn consumption_round_trip_via_patch() {
    let (app, _tmp) = test_app().await;

    let response = app
        .clone()
        .oneshot(json_request("POST", "/api/contracts", sample_contract()))
        .await
        .unwrap();
    assert_eq!(response.status(), 201);
    let contract = response_json(response).await;
    let contract_id = contract["id"].as_str().unwrap().to_string();
    let item_id = contract["items"][0]["id"].as_str().unwrap().to_string();
    assert_eq!(contract["items"][0]["consumed"], json!(0.0));

    let uri = format!("/api/contracts/{contract_id}/items/{item_id}/consumed");

    let response = app
        .clone()
        .oneshot(json_request(
            "PATCH",
            &uri,
            json!({"action": "consume", "amount": 3}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
    let item = response_json(response).await;
    assert_eq!(item["consumed"], json!(3.0));

    let response = app
        .clone()
        .oneshot(json_request(
            "PATCH",
            &uri,
            json!({"action": "reverse", "amount": 3}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
    let item = response_json(response).await;
    assert_eq!(item["consumed"], json!(0.0));

    let response = app
        .clone()
        .oneshot(empty_request(
            "GET",
            &format!("/api/contracts/{contract_id}/balance"),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
    let report = response_json(response).await;
    assert_eq!(report["items"][0]["status"], "ok");
    assert_eq!(report["contractedValue"], json!(50.0));
    assert_eq!(report["remainingValue"], json!(50.0));
}

#[tokio::test]
async fn over_consumption_classifies_exceeded() {
    let (app, _tmp) = test_app().await;

    let response = app
        .clone()
        .oneshot(json_request("POST", "/api/contracts", sample_contract()))
        .await
        .unwrap();
    let contract = response_json(response).await;
    let contract_id = contract["id"].as_str().unwrap().to_string();
    let item_id = contract["items"][0]["id"].as_str().unwrap().to_string();

    let response = app
        .clone()
        .oneshot(json_request(
            "PATCH",
            &format!("/api/contracts/{contract_id}/items/{item_id}/consumed"),
            json!({"action": "consume", "amount": 12}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), 200);

    let response = app
        .clone()
        .oneshot(empty_request(
            "GET",
            &format!("/api/contracts/{contract_id}/balance"),
        ))
        .await
        .unwrap();
    let report = response_json(response).await;
    assert_eq!(report["items"][0]["status"], "exceeded");
    // Over-consumed items contribute zero to the remaining financial value.
    assert_eq!(report["remainingValue"], json!(0.0));
}

#[tokio::test]
async fn invalid_adjustments_are_rejected() {
    let (app, _tmp) = test_app().await;

    let response = app
        .clone()
        .oneshot(json_request("POST", "/api/contracts", sample_contract()))
        .await
        .unwrap();
    let contract = response_json(response).await;
    let contract_id = contract["id"].as_str().unwrap().to_string();
    let item_id = contract["items"][0]["id"].as_str().unwrap().to_string();

    let response = app
        .clone()
        .oneshot(json_request(
            "PATCH",
            &format!("/api/contracts/{contract_id}/items/{item_id}/consumed"),
            json!({"action": "consume", "amount": 0}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), 400);

    let response = app
        .clone()
        .oneshot(json_request(
            "PATCH",
            &format!("/api/contracts/{contract_id}/items/unknown-item/consumed"),
            json!({"action": "consume", "amount": 1}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), 404);
}

#[tokio::test]
async fn batch_consumption_applies_all_entries() {
    let (app, _tmp) = test_app().await;

    let mut body = sample_contract();
    body["items"] = json!([
        {"id": "paper", "description": "A4 paper", "unit": "rm", "quantity": 100, "unitPrice": 5},
        {"id": "toner", "description": "toner cartridge", "unit": "un", "quantity": 20, "unitPrice": 90}
    ]);
    let response = app
        .clone()
        .oneshot(json_request("POST", "/api/contracts", body))
        .await
        .unwrap();
    let contract = response_json(response).await;
    let contract_id = contract["id"].as_str().unwrap().to_string();

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/contracts/consumptions",
            json!([
                {"contractId": contract_id, "itemId": "paper", "action": "consume", "amount": 10},
                {"contractId": contract_id, "itemId": "toner", "action": "consume", "amount": 2}
            ]),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
    let result = response_json(response).await;
    assert_eq!(result["updatedContracts"], json!(1));

    let response = app
        .clone()
        .oneshot(empty_request("GET", "/api/contracts"))
        .await
        .unwrap();
    let contracts = response_json(response).await;
    assert_eq!(contracts[0]["items"][0]["consumed"], json!(10.0));
    assert_eq!(contracts[0]["items"][1]["consumed"], json!(2.0));
}

#[tokio::test]
async fn duplicate_item_ids_are_a_validation_error() {
    let (app, _tmp) = test_app().await;

    let mut body = sample_contract();
    body["items"] = json!([
        {"id": "dup", "description": "a", "unit": "un", "quantity": 1, "unitPrice": 1},
        {"id": "dup", "description": "b", "unit": "un", "quantity": 1, "unitPrice": 1}
    ]);
    let response = app
        .clone()
        .oneshot(json_request("POST", "/api/contracts", body))
        .await
        .unwrap();
    assert_eq!(response.status(), 400);
}
