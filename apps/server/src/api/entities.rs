use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get},
    Json, Router,
};
use serde::Serialize;

use crate::{error::ApiResult, main_lib::AppState};
use fiscus_core::entities::{NewOrgEntity, OrgEntity, OrgEntityUpdate};

async fn get_entities(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<OrgEntity>>> {
    let entities = state.entity_service.get_entities()?;
    Ok(Json(entities))
}

async fn create_entity(
    State(state): State<Arc<AppState>>,
    Json(new_entity): Json<NewOrgEntity>,
) -> ApiResult<(StatusCode, Json<OrgEntity>)> {
    let entity = state.entity_service.create_entity(new_entity).await?;
    Ok((StatusCode::CREATED, Json(entity)))
}

async fn update_entity(
    Path(entity_id): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(update): Json<OrgEntityUpdate>,
) -> ApiResult<Json<OrgEntity>> {
    let entity = state.entity_service.update_entity(entity_id, update).await?;
    Ok(Json(entity))
}

#[derive(Serialize)]
struct DeleteResponse {
    ok: bool,
}

async fn delete_entity(
    Path(entity_id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<DeleteResponse>> {
    let _ = state.entity_service.delete_entity(entity_id).await?;
    Ok(Json(DeleteResponse { ok: true }))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/entities", get(get_entities).post(create_entity))
        .route("/entities/{id}", delete(delete_entity).put(update_entity))
}
