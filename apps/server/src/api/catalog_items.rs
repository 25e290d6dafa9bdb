use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get},
    Json, Router,
};

use crate::{error::ApiResult, main_lib::AppState};
use fiscus_core::catalog::{CatalogItem, CatalogItemUpdate, NewCatalogItem};

async fn get_catalog_items(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<CatalogItem>>> {
    let items = state.catalog_service.get_catalog_items()?;
    Ok(Json(items))
}

async fn create_catalog_item(
    State(state): State<Arc<AppState>>,
    Json(new_item): Json<NewCatalogItem>,
) -> ApiResult<(StatusCode, Json<CatalogItem>)> {
    let item = state.catalog_service.create_catalog_item(new_item).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

async fn update_catalog_item(
    Path(item_id): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(update): Json<CatalogItemUpdate>,
) -> ApiResult<Json<CatalogItem>> {
    let item = state
        .catalog_service
        .update_catalog_item(item_id, update)
        .await?;
    Ok(Json(item))
}

async fn delete_catalog_item(
    Path(item_id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<StatusCode> {
    let _ = state.catalog_service.delete_catalog_item(item_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/catalog-items",
            get(get_catalog_items).post(create_catalog_item),
        )
        .route(
            "/catalog-items/{id}",
            delete(delete_catalog_item).put(update_catalog_item),
        )
}
