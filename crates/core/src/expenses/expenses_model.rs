//! Expense domain models.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Fixed expenses recur every month; variable ones do not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpenseType {
    Fixed,
    Variable,
}

/// Payment status of an expense.
///
/// `Overdue` is a read-time projection of a pending expense past its due
/// date; it is accepted on input for client compatibility but normalized to
/// `Pending` before storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpenseStatus {
    Paid,
    Pending,
    Overdue,
}

impl ExpenseStatus {
    /// Collapse the derived `Overdue` state back to its stored form.
    pub fn stored(self) -> ExpenseStatus {
        match self {
            ExpenseStatus::Overdue => ExpenseStatus::Pending,
            other => other,
        }
    }
}

/// Domain model representing an expense.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: String,
    pub description: String,
    pub amount: Decimal,
    #[serde(rename = "type")]
    pub expense_type: ExpenseType,
    pub due_date: NaiveDate,
    /// Reference month label, e.g. "2026-08".
    pub month: String,
    pub status: ExpenseStatus,
    #[serde(default)]
    pub creditor_id: Option<String>,
    #[serde(default)]
    pub category_id: Option<String>,
    #[serde(default)]
    pub contract_id: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub paid_at: Option<DateTime<Utc>>,
}

impl Expense {
    /// The date an expense counts against for monthly bucketing: payment
    /// date when known, creation date otherwise.
    pub fn accounting_date(&self) -> NaiveDate {
        self.paid_at.unwrap_or(self.created_at).date_naive()
    }
}

/// Input model for creating a new expense.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewExpense {
    pub id: Option<String>,
    pub description: String,
    pub amount: Decimal,
    #[serde(rename = "type")]
    pub expense_type: ExpenseType,
    pub due_date: NaiveDate,
    pub month: String,
    #[serde(default)]
    pub status: Option<ExpenseStatus>,
    #[serde(default)]
    pub creditor_id: Option<String>,
    #[serde(default)]
    pub category_id: Option<String>,
    #[serde(default)]
    pub contract_id: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub paid_at: Option<DateTime<Utc>>,
}

/// Wholesale update of an expense.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseUpdate {
    pub description: String,
    pub amount: Decimal,
    #[serde(rename = "type")]
    pub expense_type: ExpenseType,
    pub due_date: NaiveDate,
    pub month: String,
    pub status: ExpenseStatus,
    #[serde(default)]
    pub creditor_id: Option<String>,
    #[serde(default)]
    pub category_id: Option<String>,
    #[serde(default)]
    pub contract_id: Option<String>,
    #[serde(default)]
    pub paid_at: Option<DateTime<Utc>>,
}
