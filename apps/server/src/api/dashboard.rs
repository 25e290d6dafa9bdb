use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};

use crate::{error::ApiResult, main_lib::AppState};
use fiscus_core::expenses::DashboardSummary;

/// Headline metrics, three-month forecast and type split, computed over the
/// full expense list against the configured available balance.
async fn get_dashboard(State(state): State<Arc<AppState>>) -> ApiResult<Json<DashboardSummary>> {
    let settings = state.settings_service.get_settings()?;
    let summary = state
        .expense_service
        .dashboard(settings.available_balance)?;
    Ok(Json(summary))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/dashboard", get(get_dashboard))
}
