use std::sync::Arc;

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;

use crate::{error::ApiResult, main_lib::AppState};
use fiscus_core::pncp::{CatalogKind, RegistryCatalog, RegistrySearchResponse};

#[derive(Deserialize)]
struct SearchQuery {
    #[serde(default)]
    q: String,
    #[serde(default)]
    kind: Option<CatalogKind>,
    #[serde(default)]
    page: Option<u32>,
}

async fn search(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SearchQuery>,
) -> ApiResult<Json<RegistrySearchResponse>> {
    let response = state
        .pncp_service
        .search(
            &query.q,
            query.kind.unwrap_or_default(),
            query.page.unwrap_or(1),
        )
        .await;
    Ok(Json(response))
}

async fn catalogs(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<RegistryCatalog>>> {
    Ok(Json(state.pncp_service.catalogs().await))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/pncp-catalog/search", get(search))
        .route("/pncp-catalog/catalogs", get(catalogs))
}
