use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get},
    Json, Router,
};

use crate::{error::ApiResult, main_lib::AppState};
use fiscus_core::creditors::{Creditor, CreditorUpdate, NewCreditor};

async fn get_creditors(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<Creditor>>> {
    let creditors = state.creditor_service.get_creditors()?;
    Ok(Json(creditors))
}

async fn create_creditor(
    State(state): State<Arc<AppState>>,
    Json(new_creditor): Json<NewCreditor>,
) -> ApiResult<(StatusCode, Json<Creditor>)> {
    let creditor = state.creditor_service.create_creditor(new_creditor).await?;
    Ok((StatusCode::CREATED, Json(creditor)))
}

async fn update_creditor(
    Path(creditor_id): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(update): Json<CreditorUpdate>,
) -> ApiResult<Json<Creditor>> {
    let creditor = state
        .creditor_service
        .update_creditor(creditor_id, update)
        .await?;
    Ok(Json(creditor))
}

async fn delete_creditor(
    Path(creditor_id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<StatusCode> {
    let _ = state.creditor_service.delete_creditor(creditor_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/creditors", get(get_creditors).post(create_creditor))
        .route(
            "/creditors/{id}",
            delete(delete_creditor).put(update_creditor),
        )
}
