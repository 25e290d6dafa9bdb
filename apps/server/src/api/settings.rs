use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};

use crate::{error::ApiResult, main_lib::AppState};
use fiscus_core::errors::{Error, ValidationError};
use fiscus_core::settings::{Settings, SettingsUpdate};

async fn get_settings(State(state): State<Arc<AppState>>) -> ApiResult<Json<Settings>> {
    let settings = state.settings_service.get_settings()?;
    Ok(Json(settings))
}

/// Merge a partial settings document. The update type enumerates every
/// recognized key; unrecognized fields are a validation error, not silently
/// stored.
async fn put_settings(
    State(state): State<Arc<AppState>>,
    Json(body): Json<serde_json::Value>,
) -> ApiResult<Json<Settings>> {
    let update: SettingsUpdate = serde_json::from_value(body)
        .map_err(|e| Error::Validation(ValidationError::InvalidInput(e.to_string())))?;
    let settings = state.settings_service.update_settings(&update).await?;
    Ok(Json(settings))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/settings", get(get_settings).put(put_settings))
}
