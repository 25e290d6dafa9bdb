use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::header,
    routing::get,
    Router,
};
use chrono::{NaiveDate, Utc};
use serde::Deserialize;

use crate::{error::ApiResult, main_lib::AppState};
use fiscus_core::entities::OrgEntity;
use fiscus_core::export::{render_expenses_pdf, render_expenses_xlsx, ExportOptions};
use fiscus_core::settings::Settings;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ExportQuery {
    #[serde(default)]
    start_date: Option<NaiveDate>,
    #[serde(default)]
    end_date: Option<NaiveDate>,
    #[serde(default)]
    generated_by: Option<String>,
}

type FileResponse = ([(header::HeaderName, String); 2], Vec<u8>);

async fn export_xlsx(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ExportQuery>,
) -> ApiResult<FileResponse> {
    render_with(&state, query, |options| {
        let bytes = render_expenses_xlsx(options)?;
        Ok((
            "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
            "xlsx",
            bytes,
        ))
    })
}

async fn export_pdf(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ExportQuery>,
) -> ApiResult<FileResponse> {
    render_with(&state, query, |options| {
        let bytes = render_expenses_pdf(options)?;
        Ok(("application/pdf", "pdf", bytes))
    })
}

fn render_with(
    state: &Arc<AppState>,
    query: ExportQuery,
    render: impl FnOnce(&ExportOptions) -> fiscus_core::Result<(&'static str, &'static str, Vec<u8>)>,
) -> ApiResult<FileResponse> {
    let expenses = state.expense_service.get_expenses()?;
    let creditors = state.creditor_service.get_creditors()?;
    let settings = state.settings_service.get_settings()?;
    let entities = state.entity_service.get_entities()?;
    let entity = resolve_entity(&entities, &settings);

    let options = ExportOptions {
        expenses: &expenses,
        creditors: &creditors,
        start_date: query.start_date,
        end_date: query.end_date,
        entity,
        settings: &settings,
        generated_by: query.generated_by.as_deref(),
        generated_at: Utc::now(),
    };
    let (content_type, extension, bytes) = render(&options)?;

    let filename = format!(
        "fiscus_expenses_{}.{extension}",
        range_suffix(query.start_date, query.end_date)
    );
    Ok((
        [
            (header::CONTENT_TYPE, content_type.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        bytes,
    ))
}

/// The profile referenced by settings wins; otherwise the first registered
/// profile is used for branding.
fn resolve_entity<'a>(entities: &'a [OrgEntity], settings: &Settings) -> Option<&'a OrgEntity> {
    settings
        .entity_id
        .as_deref()
        .and_then(|id| entities.iter().find(|e| e.id == id))
        .or_else(|| entities.first())
}

fn range_suffix(start_date: Option<NaiveDate>, end_date: Option<NaiveDate>) -> String {
    match (start_date, end_date) {
        (Some(start), Some(end)) => format!("{start}_{end}"),
        (Some(start), None) => format!("from_{start}"),
        (None, Some(end)) => format!("until_{end}"),
        (None, None) => "all".to_string(),
    }
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/exports/expenses.xlsx", get(export_xlsx))
        .route("/exports/expenses.pdf", get(export_pdf))
}
