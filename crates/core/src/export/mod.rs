//! Expense export renderers.
//!
//! Renders a date-filtered expense slice to a spreadsheet or a PDF report,
//! both carrying the organization's branding texts. Callers pass expenses
//! with statuses already derived; the renderers do not re-derive.

mod excel;
mod pdf;

pub use excel::render_expenses_xlsx;
pub use pdf::render_expenses_pdf;

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;

use crate::creditors::Creditor;
use crate::entities::OrgEntity;
use crate::expenses::{Expense, ExpenseStatus, ExpenseType};
use crate::settings::Settings;

/// Everything an export render needs in one place.
pub struct ExportOptions<'a> {
    pub expenses: &'a [Expense],
    pub creditors: &'a [Creditor],
    /// Inclusive due-date bounds; `None` leaves that side open.
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub entity: Option<&'a OrgEntity>,
    pub settings: &'a Settings,
    pub generated_by: Option<&'a str>,
    pub generated_at: DateTime<Utc>,
}

/// Totals block shared by both renderers.
pub(crate) struct ExportSummary {
    pub total_paid: Decimal,
    pub total_pending: Decimal,
    pub count: usize,
}

impl ExportSummary {
    pub(crate) fn grand_total(&self) -> Decimal {
        self.total_paid + self.total_pending
    }
}

pub(crate) fn filter_expenses<'a>(options: &'a ExportOptions<'a>) -> Vec<&'a Expense> {
    options
        .expenses
        .iter()
        .filter(|e| options.start_date.map_or(true, |start| e.due_date >= start))
        .filter(|e| options.end_date.map_or(true, |end| e.due_date <= end))
        .collect()
}

pub(crate) fn summarize(expenses: &[&Expense]) -> ExportSummary {
    let total_paid = expenses
        .iter()
        .filter(|e| e.status == ExpenseStatus::Paid)
        .map(|e| e.amount)
        .sum();
    let total_pending = expenses
        .iter()
        .filter(|e| e.status != ExpenseStatus::Paid)
        .map(|e| e.amount)
        .sum();
    ExportSummary {
        total_paid,
        total_pending,
        count: expenses.len(),
    }
}

pub(crate) fn creditor_name<'a>(creditors: &'a [Creditor], creditor_id: Option<&str>) -> &'a str {
    creditor_id
        .and_then(|id| creditors.iter().find(|c| c.id == id))
        .map(|c| c.name.as_str())
        .unwrap_or("N/A")
}

pub(crate) fn creditor_document<'a>(
    creditors: &'a [Creditor],
    creditor_id: Option<&str>,
) -> &'a str {
    creditor_id
        .and_then(|id| creditors.iter().find(|c| c.id == id))
        .map(|c| c.document_number.as_str())
        .filter(|d| !d.is_empty())
        .unwrap_or("N/A")
}

pub(crate) fn status_label(status: ExpenseStatus) -> &'static str {
    match status {
        ExpenseStatus::Paid => "Pago",
        ExpenseStatus::Pending => "Pendente",
        ExpenseStatus::Overdue => "Vencido",
    }
}

pub(crate) fn type_label(expense_type: ExpenseType) -> &'static str {
    match expense_type {
        ExpenseType::Fixed => "Fixa",
        ExpenseType::Variable => "Variável",
    }
}

pub(crate) fn format_date_br(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// Format an amount in Brazilian currency notation: `R$ 1.234,56`.
pub fn format_brl(amount: Decimal) -> String {
    let rounded = amount.round_dp(2);
    let negative = rounded.is_sign_negative();
    let text = rounded.abs().to_string();
    let (int_part, frac_part) = match text.split_once('.') {
        Some((i, f)) => (i.to_string(), format!("{f:0<2}")),
        None => (text, "00".to_string()),
    };

    let mut grouped = String::new();
    for (index, ch) in int_part.chars().enumerate() {
        if index > 0 && (int_part.len() - index) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    let sign = if negative { "-" } else { "" };
    format!("{sign}R$ {grouped},{frac_part}")
}
