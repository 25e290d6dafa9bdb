//! REST route modules, one per resource.

mod auth;
mod catalog_items;
mod categories;
mod contracts;
mod creditors;
mod dashboard;
mod entities;
mod expenses;
mod exports;
mod health;
mod pncp_catalog;
mod settings;

use std::sync::Arc;

use axum::http::HeaderValue;
use axum::Router;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::main_lib::AppState;

pub fn app_router(state: Arc<AppState>, config: &Config) -> Router {
    let cors = match &config.allowed_origins {
        Some(origins) => {
            let parsed: Vec<HeaderValue> = origins
                .iter()
                .filter_map(|origin| HeaderValue::from_str(origin).ok())
                .collect();
            CorsLayer::new()
                .allow_origin(AllowOrigin::list(parsed))
                .allow_methods(Any)
                .allow_headers(Any)
        }
        None => CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
    };

    let api = Router::new()
        .merge(health::router())
        .merge(auth::router())
        .merge(creditors::router())
        .merge(expenses::router())
        .merge(categories::router())
        .merge(contracts::router())
        .merge(catalog_items::router())
        .merge(entities::router())
        .merge(settings::router())
        .merge(pncp_catalog::router())
        .merge(dashboard::router())
        .merge(exports::router());

    Router::new()
        .nest("/api", api)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
