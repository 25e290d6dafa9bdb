mod common;

use chrono::{Duration, Utc};
use common::{empty_request, json_request, response_json, test_app};
use serde_json::json;
use tower::ServiceExt;

#[tokio::test]
async fn dashboard_aggregates_expenses_against_available_balance() {
    let (app, _tmp) = test_app().await;

    let response = app
        .clone()
        .oneshot(json_request(
            "PUT",
            "/api/settings",
            json!({"availableBalance": 1000}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), 200);

    let now = Utc::now();
    let today = now.date_naive();
    let month = today.format("%Y-%m").to_string();

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/expenses",
            json!({
                "description": "paid this month",
                "amount": 100,
                "type": "fixed",
                "dueDate": today.format("%Y-%m-%d").to_string(),
                "month": month,
                "status": "paid",
                "paidAt": now.to_rfc3339()
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), 201);

    let due_soon = today + Duration::days(3);
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/expenses",
            json!({
                "description": "due in three days",
                "amount": 50,
                "type": "variable",
                "dueDate": due_soon.format("%Y-%m-%d").to_string(),
                "month": month,
                "status": "pending"
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), 201);

    let response = app
        .clone()
        .oneshot(empty_request("GET", "/api/dashboard"))
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
    let summary = response_json(response).await;

    assert_eq!(summary["metrics"]["totalSpentThisMonth"], json!(100.0));
    assert_eq!(summary["metrics"]["totalPending"], json!(50.0));
    assert_eq!(summary["metrics"]["availableBalance"], json!(1000.0));
    assert_eq!(summary["metrics"]["upcomingDueCount"], json!(1));

    // Three forecast rows starting at the current month.
    assert_eq!(summary["forecast"].as_array().unwrap().len(), 3);
    assert_eq!(summary["forecast"][0]["month"], month);
    assert_eq!(summary["byType"]["fixed"], json!(100.0));
    assert_eq!(summary["byType"]["variable"], json!(50.0));
}

#[tokio::test]
async fn pending_expenses_past_due_read_back_as_overdue() {
    let (app, _tmp) = test_app().await;

    let yesterday = (Utc::now() - Duration::days(1)).date_naive();
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/expenses",
            json!({
                "description": "late payment",
                "amount": 75,
                "type": "variable",
                "dueDate": yesterday.format("%Y-%m-%d").to_string(),
                "month": yesterday.format("%Y-%m").to_string(),
                "status": "pending"
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), 201);

    let response = app
        .clone()
        .oneshot(empty_request("GET", "/api/expenses"))
        .await
        .unwrap();
    let expenses = response_json(response).await;
    assert_eq!(expenses[0]["status"], "overdue");
}
