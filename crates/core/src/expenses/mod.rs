//! Expenses module - domain models, services, and dashboard metrics.

mod expenses_model;
mod expenses_service;
mod expenses_traits;
pub mod metrics;

pub use expenses_model::{Expense, ExpenseStatus, ExpenseType, ExpenseUpdate, NewExpense};
pub use expenses_service::ExpenseService;
pub use expenses_traits::{ExpenseRepositoryTrait, ExpenseServiceTrait};
pub use metrics::{DashboardMetrics, DashboardSummary, MonthlyForecast, TypeSplit};
