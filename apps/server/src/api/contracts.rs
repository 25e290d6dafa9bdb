use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, patch, post},
    Json, Router,
};
use serde::Serialize;

use crate::{error::ApiResult, main_lib::AppState};
use fiscus_core::contracts::{
    BalanceReport, ConsumptionAdjustment, ConsumptionEntry, Contract, ContractAlert, ContractItem,
    ContractUpdate, NewContract,
};

async fn get_contracts(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<Contract>>> {
    let contracts = state.contract_service.get_contracts()?;
    Ok(Json(contracts))
}

async fn create_contract(
    State(state): State<Arc<AppState>>,
    Json(new_contract): Json<NewContract>,
) -> ApiResult<(StatusCode, Json<Contract>)> {
    let contract = state.contract_service.create_contract(new_contract).await?;
    Ok((StatusCode::CREATED, Json(contract)))
}

async fn update_contract(
    Path(contract_id): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(update): Json<ContractUpdate>,
) -> ApiResult<Json<Contract>> {
    let contract = state
        .contract_service
        .update_contract(contract_id, update)
        .await?;
    Ok(Json(contract))
}

async fn delete_contract(
    Path(contract_id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<StatusCode> {
    let _ = state.contract_service.delete_contract(contract_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Adjust one item's consumed quantity. The body selects the operation:
/// `{"action":"consume","amount":3}`, `reverse`, or `set`.
async fn adjust_consumed(
    Path((contract_id, item_id)): Path<(String, String)>,
    State(state): State<Arc<AppState>>,
    Json(adjustment): Json<ConsumptionAdjustment>,
) -> ApiResult<Json<ContractItem>> {
    let item = state
        .contract_service
        .adjust_consumption(&contract_id, &item_id, adjustment)
        .await?;
    Ok(Json(item))
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct BatchResponse {
    updated_contracts: usize,
}

/// Apply a batch of consumption adjustments atomically.
async fn adjust_consumed_batch(
    State(state): State<Arc<AppState>>,
    Json(entries): Json<Vec<ConsumptionEntry>>,
) -> ApiResult<Json<BatchResponse>> {
    let updated_contracts = state
        .contract_service
        .adjust_consumption_batch(entries)
        .await?;
    Ok(Json(BatchResponse { updated_contracts }))
}

async fn get_balance(
    Path(contract_id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<BalanceReport>> {
    let report = state.contract_service.balance_report(&contract_id)?;
    Ok(Json(report))
}

async fn get_alerts(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<ContractAlert>>> {
    let alerts = state.contract_service.expiry_alerts()?;
    Ok(Json(alerts))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/contracts", get(get_contracts).post(create_contract))
        .route("/contracts/alerts", get(get_alerts))
        .route("/contracts/consumptions", post(adjust_consumed_batch))
        .route(
            "/contracts/{id}",
            delete(delete_contract).put(update_contract),
        )
        .route("/contracts/{id}/balance", get(get_balance))
        .route(
            "/contracts/{id}/items/{item_id}/consumed",
            patch(adjust_consumed),
        )
}
