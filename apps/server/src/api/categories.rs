use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get},
    Json, Router,
};

use crate::{error::ApiResult, main_lib::AppState};
use fiscus_core::categories::{Category, CategoryUpdate, NewCategory};

async fn get_categories(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<Category>>> {
    let categories = state.category_service.get_categories()?;
    Ok(Json(categories))
}

async fn create_category(
    State(state): State<Arc<AppState>>,
    Json(new_category): Json<NewCategory>,
) -> ApiResult<(StatusCode, Json<Category>)> {
    let category = state.category_service.create_category(new_category).await?;
    Ok((StatusCode::CREATED, Json(category)))
}

async fn update_category(
    Path(category_id): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(update): Json<CategoryUpdate>,
) -> ApiResult<Json<Category>> {
    let category = state
        .category_service
        .update_category(category_id, update)
        .await?;
    Ok(Json(category))
}

async fn delete_category(
    Path(category_id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<StatusCode> {
    let _ = state.category_service.delete_category(category_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/categories", get(get_categories).post(create_category))
        .route(
            "/categories/{id}",
            delete(delete_category).put(update_category),
        )
}
