use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::errors::Result;

use super::expenses_model::{Expense, ExpenseUpdate, NewExpense};
use super::metrics::DashboardSummary;

/// Trait for expense repository operations.
#[async_trait]
pub trait ExpenseRepositoryTrait: Send + Sync {
    /// All expenses ordered by due date.
    fn load_expenses(&self) -> Result<Vec<Expense>>;
    fn find_expense(&self, expense_id: &str) -> Result<Expense>;
    async fn insert_expense(&self, expense: Expense) -> Result<Expense>;
    async fn update_expense(&self, expense: Expense) -> Result<Expense>;
    async fn delete_expense(&self, expense_id: String) -> Result<usize>;
}

/// Trait for expense service operations.
#[async_trait]
pub trait ExpenseServiceTrait: Send + Sync {
    /// All expenses with overdue statuses derived as of today.
    fn get_expenses(&self) -> Result<Vec<Expense>>;
    async fn create_expense(&self, new_expense: NewExpense) -> Result<Expense>;
    async fn update_expense(&self, expense_id: String, update: ExpenseUpdate) -> Result<Expense>;
    async fn delete_expense(&self, expense_id: String) -> Result<usize>;
    /// Metrics, forecast and type split in one pass over the expense list.
    fn dashboard(&self, available_balance: Decimal) -> Result<DashboardSummary>;
}
