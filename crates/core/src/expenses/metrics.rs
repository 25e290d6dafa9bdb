//! Dashboard metrics over the expense list.
//!
//! All values here are single-pass derivations; nothing is written back.
//! Status derivation runs first so that pending expenses past their due date
//! count as overdue everywhere below.

use chrono::{Datelike, Duration, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::constants::{FORECAST_WINDOW_MONTHS, UPCOMING_DUE_WINDOW_DAYS};

use super::expenses_model::{Expense, ExpenseStatus, ExpenseType};

/// Headline numbers for the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardMetrics {
    pub total_spent_this_month: Decimal,
    pub total_pending: Decimal,
    pub available_balance: Decimal,
    pub upcoming_due_count: usize,
}

/// One forecast row: the actual total for a month plus the flat projection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyForecast {
    /// Calendar month key, `YYYY-MM`.
    pub month: String,
    pub actual: Decimal,
    pub projected: Decimal,
}

/// Totals split by expense type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeSplit {
    pub fixed: Decimal,
    pub variable: Decimal,
}

/// Everything the dashboard endpoint returns in one shot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub metrics: DashboardMetrics,
    pub forecast: Vec<MonthlyForecast>,
    pub by_type: TypeSplit,
}

/// Present pending expenses past their due date as overdue. Date-only
/// comparison; an expense due today is not overdue yet.
pub fn derive_statuses(mut expenses: Vec<Expense>, today: NaiveDate) -> Vec<Expense> {
    for expense in &mut expenses {
        if expense.status != ExpenseStatus::Paid && expense.due_date < today {
            expense.status = ExpenseStatus::Overdue;
        }
    }
    expenses
}

/// Compute the headline metrics. Expects statuses to be derived already.
pub fn dashboard_metrics(
    expenses: &[Expense],
    available_balance: Decimal,
    today: NaiveDate,
) -> DashboardMetrics {
    let total_spent_this_month = expenses
        .iter()
        .filter(|e| e.status == ExpenseStatus::Paid)
        .filter(|e| {
            let paid = e.accounting_date();
            paid.year() == today.year() && paid.month() == today.month()
        })
        .map(|e| e.amount)
        .sum();

    let total_pending = expenses
        .iter()
        .filter(|e| matches!(e.status, ExpenseStatus::Pending | ExpenseStatus::Overdue))
        .map(|e| e.amount)
        .sum();

    let window_end = today + Duration::days(UPCOMING_DUE_WINDOW_DAYS);
    let upcoming_due_count = expenses
        .iter()
        .filter(|e| e.status != ExpenseStatus::Paid)
        .filter(|e| e.due_date >= today && e.due_date <= window_end)
        .count();

    DashboardMetrics {
        total_spent_this_month,
        total_pending,
        available_balance,
        upcoming_due_count,
    }
}

/// Project a flat monthly average over the current month and the next two.
///
/// The average is taken over the three calendar months ending at the current
/// one; months with no paid expenses count as zero. The projection is rounded
/// to a whole amount.
pub fn monthly_forecast(expenses: &[Expense], today: NaiveDate) -> Vec<MonthlyForecast> {
    let mut monthly_totals: HashMap<(i32, u32), Decimal> = HashMap::new();
    for expense in expenses.iter().filter(|e| e.status == ExpenseStatus::Paid) {
        let paid = expense.accounting_date();
        *monthly_totals
            .entry((paid.year(), paid.month()))
            .or_insert(Decimal::ZERO) += expense.amount;
    }

    let window = FORECAST_WINDOW_MONTHS as i32;
    let mut lookback_sum = Decimal::ZERO;
    for offset in 0..window {
        let key = shift_month(today.year(), today.month(), -offset);
        lookback_sum += monthly_totals.get(&key).copied().unwrap_or(Decimal::ZERO);
    }
    let projected = (lookback_sum / Decimal::from(window)).round_dp(0);

    (0..window)
        .map(|offset| {
            let (year, month) = shift_month(today.year(), today.month(), offset);
            MonthlyForecast {
                month: format!("{year:04}-{month:02}"),
                actual: monthly_totals
                    .get(&(year, month))
                    .copied()
                    .unwrap_or(Decimal::ZERO),
                projected,
            }
        })
        .collect()
}

/// Sum amounts by fixed vs. variable type.
pub fn type_split(expenses: &[Expense]) -> TypeSplit {
    let mut split = TypeSplit {
        fixed: Decimal::ZERO,
        variable: Decimal::ZERO,
    };
    for expense in expenses {
        match expense.expense_type {
            ExpenseType::Fixed => split.fixed += expense.amount,
            ExpenseType::Variable => split.variable += expense.amount,
        }
    }
    split
}

fn shift_month(year: i32, month: u32, delta: i32) -> (i32, u32) {
    let total = year * 12 + month as i32 - 1 + delta;
    (total.div_euclid(12), (total.rem_euclid(12) + 1) as u32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use rust_decimal_macros::dec;

    fn expense(
        id: &str,
        amount: Decimal,
        status: ExpenseStatus,
        due_date: NaiveDate,
        paid_at: Option<NaiveDate>,
    ) -> Expense {
        Expense {
            id: id.to_string(),
            description: format!("expense {id}"),
            amount,
            expense_type: ExpenseType::Variable,
            due_date,
            month: format!("{:04}-{:02}", due_date.year(), due_date.month()),
            status,
            creditor_id: None,
            category_id: None,
            contract_id: None,
            created_at: Utc.with_ymd_and_hms(2026, 1, 10, 9, 0, 0).unwrap(),
            paid_at: paid_at.map(|d| {
                Utc.from_utc_datetime(&d.and_hms_opt(12, 0, 0).unwrap())
            }),
        }
    }

    #[test]
    fn headline_metrics_scenario() {
        let today = NaiveDate::from_ymd_opt(2026, 8, 10).unwrap();
        let expenses = vec![
            expense(
                "paid",
                dec!(100),
                ExpenseStatus::Paid,
                today - Duration::days(3),
                Some(today - Duration::days(2)),
            ),
            expense(
                "pending",
                dec!(50),
                ExpenseStatus::Pending,
                today + Duration::days(3),
                None,
            ),
        ];
        let metrics = dashboard_metrics(&expenses, dec!(1000), today);
        assert_eq!(metrics.total_spent_this_month, dec!(100));
        assert_eq!(metrics.total_pending, dec!(50));
        assert_eq!(metrics.available_balance, dec!(1000));
        assert_eq!(metrics.upcoming_due_count, 1);
    }

    #[test]
    fn paid_expenses_outside_current_month_do_not_count() {
        let today = NaiveDate::from_ymd_opt(2026, 8, 10).unwrap();
        let last_month = NaiveDate::from_ymd_opt(2026, 7, 20).unwrap();
        let expenses = vec![expense(
            "old",
            dec!(80),
            ExpenseStatus::Paid,
            last_month,
            Some(last_month),
        )];
        let metrics = dashboard_metrics(&expenses, Decimal::ZERO, today);
        assert_eq!(metrics.total_spent_this_month, Decimal::ZERO);
    }

    #[test]
    fn due_window_is_inclusive_on_both_ends() {
        let today = NaiveDate::from_ymd_opt(2026, 8, 10).unwrap();
        let expenses = vec![
            expense("today", dec!(1), ExpenseStatus::Pending, today, None),
            expense(
                "edge",
                dec!(1),
                ExpenseStatus::Pending,
                today + Duration::days(7),
                None,
            ),
            expense(
                "beyond",
                dec!(1),
                ExpenseStatus::Pending,
                today + Duration::days(8),
                None,
            ),
        ];
        let metrics = dashboard_metrics(&expenses, Decimal::ZERO, today);
        assert_eq!(metrics.upcoming_due_count, 2);
    }

    #[test]
    fn overdue_is_derived_not_stored() {
        let today = NaiveDate::from_ymd_opt(2026, 8, 10).unwrap();
        let expenses = derive_statuses(
            vec![
                expense(
                    "late",
                    dec!(10),
                    ExpenseStatus::Pending,
                    today - Duration::days(1),
                    None,
                ),
                expense("due-today", dec!(10), ExpenseStatus::Pending, today, None),
                expense(
                    "paid-late",
                    dec!(10),
                    ExpenseStatus::Paid,
                    today - Duration::days(5),
                    Some(today - Duration::days(4)),
                ),
            ],
            today,
        );
        assert_eq!(expenses[0].status, ExpenseStatus::Overdue);
        assert_eq!(expenses[1].status, ExpenseStatus::Pending);
        assert_eq!(expenses[2].status, ExpenseStatus::Paid);
    }

    #[test]
    fn forecast_averages_three_months_with_missing_as_zero() {
        let today = NaiveDate::from_ymd_opt(2026, 8, 10).unwrap();
        // 300 paid two months ago, 600 this month, nothing last month.
        let june = NaiveDate::from_ymd_opt(2026, 6, 5).unwrap();
        let expenses = vec![
            expense("june", dec!(300), ExpenseStatus::Paid, june, Some(june)),
            expense("aug", dec!(600), ExpenseStatus::Paid, today, Some(today)),
        ];
        let forecast = monthly_forecast(&expenses, today);
        assert_eq!(forecast.len(), 3);
        assert_eq!(forecast[0].month, "2026-08");
        assert_eq!(forecast[0].actual, dec!(600));
        assert_eq!(forecast[0].projected, dec!(300));
        assert_eq!(forecast[1].month, "2026-09");
        assert_eq!(forecast[1].actual, Decimal::ZERO);
        assert_eq!(forecast[2].month, "2026-10");
    }

    #[test]
    fn forecast_months_wrap_across_year_end() {
        let today = NaiveDate::from_ymd_opt(2026, 12, 1).unwrap();
        let forecast = monthly_forecast(&[], today);
        let months: Vec<&str> = forecast.iter().map(|f| f.month.as_str()).collect();
        assert_eq!(months, vec!["2026-12", "2027-01", "2027-02"]);
    }

    #[test]
    fn type_split_sums_fixed_and_variable() {
        let today = NaiveDate::from_ymd_opt(2026, 8, 10).unwrap();
        let mut fixed = expense("f", dec!(120), ExpenseStatus::Pending, today, None);
        fixed.expense_type = ExpenseType::Fixed;
        let variable = expense("v", dec!(30), ExpenseStatus::Pending, today, None);
        let split = type_split(&[fixed, variable]);
        assert_eq!(split.fixed, dec!(120));
        assert_eq!(split.variable, dec!(30));
    }
}
