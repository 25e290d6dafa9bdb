//! Database model for expenses.

use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use fiscus_core::expenses::{Expense, ExpenseStatus};

use crate::categories::{expense_type_from_str, expense_type_to_str};
use crate::utils::{parse_datetime_utc, parse_decimal, parse_naive_date};

#[derive(
    Queryable,
    Identifiable,
    Insertable,
    AsChangeset,
    Selectable,
    PartialEq,
    Serialize,
    Deserialize,
    Debug,
    Clone,
)]
#[diesel(table_name = crate::schema::expenses)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[diesel(treat_none_as_null = true)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseDB {
    pub id: String,
    pub description: String,
    pub amount: String,
    pub expense_type: String,
    pub due_date: String,
    pub month: String,
    pub status: String,
    pub creditor_id: Option<String>,
    pub category_id: Option<String>,
    pub contract_id: Option<String>,
    pub created_at: String,
    pub paid_at: Option<String>,
}

fn status_to_str(status: ExpenseStatus) -> &'static str {
    // Only stored states reach the database; `Overdue` is collapsed by the
    // service before writes.
    match status.stored() {
        ExpenseStatus::Paid => "paid",
        _ => "pending",
    }
}

fn status_from_str(value: &str) -> ExpenseStatus {
    match value {
        "paid" => ExpenseStatus::Paid,
        "pending" | "overdue" => ExpenseStatus::Pending,
        other => {
            log::error!("unknown expense status '{other}', treating as pending");
            ExpenseStatus::Pending
        }
    }
}

impl From<ExpenseDB> for Expense {
    fn from(db: ExpenseDB) -> Self {
        Self {
            id: db.id,
            description: db.description,
            amount: parse_decimal(&db.amount, "amount"),
            expense_type: expense_type_from_str(&db.expense_type),
            due_date: parse_naive_date(&db.due_date, "due_date"),
            month: db.month,
            status: status_from_str(&db.status),
            creditor_id: db.creditor_id,
            category_id: db.category_id,
            contract_id: db.contract_id,
            created_at: parse_datetime_utc(&db.created_at, "created_at"),
            paid_at: db
                .paid_at
                .as_deref()
                .map(|s| parse_datetime_utc(s, "paid_at")),
        }
    }
}

impl From<Expense> for ExpenseDB {
    fn from(domain: Expense) -> Self {
        Self {
            id: domain.id,
            description: domain.description,
            amount: domain.amount.to_string(),
            expense_type: expense_type_to_str(domain.expense_type).to_string(),
            due_date: domain.due_date.format("%Y-%m-%d").to_string(),
            month: domain.month,
            status: status_to_str(domain.status).to_string(),
            creditor_id: domain.creditor_id,
            category_id: domain.category_id,
            contract_id: domain.contract_id,
            created_at: domain.created_at.to_rfc3339(),
            paid_at: domain.paid_at.map(|d| d.to_rfc3339()),
        }
    }
}
