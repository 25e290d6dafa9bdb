use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get},
    Json, Router,
};

use crate::{error::ApiResult, main_lib::AppState};
use fiscus_core::expenses::{Expense, ExpenseUpdate, NewExpense};

/// Expenses are listed with read-time statuses: a pending expense past its
/// due date comes back as overdue.
async fn get_expenses(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<Expense>>> {
    let expenses = state.expense_service.get_expenses()?;
    Ok(Json(expenses))
}

async fn create_expense(
    State(state): State<Arc<AppState>>,
    Json(new_expense): Json<NewExpense>,
) -> ApiResult<(StatusCode, Json<Expense>)> {
    let expense = state.expense_service.create_expense(new_expense).await?;
    Ok((StatusCode::CREATED, Json(expense)))
}

async fn update_expense(
    Path(expense_id): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(update): Json<ExpenseUpdate>,
) -> ApiResult<Json<Expense>> {
    let expense = state
        .expense_service
        .update_expense(expense_id, update)
        .await?;
    Ok(Json(expense))
}

async fn delete_expense(
    Path(expense_id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<StatusCode> {
    let _ = state.expense_service.delete_expense(expense_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/expenses", get(get_expenses).post(create_expense))
        .route(
            "/expenses/{id}",
            delete(delete_expense).put(update_expense),
        )
}
