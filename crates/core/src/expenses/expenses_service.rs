use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::errors::{Result, ValidationError};

use super::expenses_model::{Expense, ExpenseStatus, ExpenseUpdate, NewExpense};
use super::expenses_traits::{ExpenseRepositoryTrait, ExpenseServiceTrait};
use super::metrics::{dashboard_metrics, derive_statuses, monthly_forecast, type_split};
use super::DashboardSummary;

pub struct ExpenseService {
    expense_repository: Arc<dyn ExpenseRepositoryTrait>,
}

impl ExpenseService {
    pub fn new(expense_repository: Arc<dyn ExpenseRepositoryTrait>) -> Self {
        ExpenseService { expense_repository }
    }

    fn validate(description: &str, amount: Decimal, month: &str) -> Result<()> {
        if description.trim().is_empty() {
            return Err(ValidationError::MissingField("description".to_string()).into());
        }
        if month.trim().is_empty() {
            return Err(ValidationError::MissingField("month".to_string()).into());
        }
        if amount < Decimal::ZERO {
            return Err(
                ValidationError::InvalidInput("amount cannot be negative".to_string()).into(),
            );
        }
        Ok(())
    }
}

#[async_trait]
impl ExpenseServiceTrait for ExpenseService {
    fn get_expenses(&self) -> Result<Vec<Expense>> {
        let expenses = self.expense_repository.load_expenses()?;
        Ok(derive_statuses(expenses, Utc::now().date_naive()))
    }

    async fn create_expense(&self, new_expense: NewExpense) -> Result<Expense> {
        Self::validate(&new_expense.description, new_expense.amount, &new_expense.month)?;
        let expense = Expense {
            id: new_expense.id.unwrap_or_else(|| Uuid::new_v4().to_string()),
            description: new_expense.description,
            amount: new_expense.amount,
            expense_type: new_expense.expense_type,
            due_date: new_expense.due_date,
            month: new_expense.month,
            status: new_expense
                .status
                .unwrap_or(ExpenseStatus::Pending)
                .stored(),
            creditor_id: new_expense.creditor_id,
            category_id: new_expense.category_id,
            contract_id: new_expense.contract_id,
            created_at: new_expense.created_at.unwrap_or_else(Utc::now),
            paid_at: new_expense.paid_at,
        };
        self.expense_repository.insert_expense(expense).await
    }

    async fn update_expense(&self, expense_id: String, update: ExpenseUpdate) -> Result<Expense> {
        Self::validate(&update.description, update.amount, &update.month)?;
        let existing = self.expense_repository.find_expense(&expense_id)?;
        let expense = Expense {
            id: existing.id,
            description: update.description,
            amount: update.amount,
            expense_type: update.expense_type,
            due_date: update.due_date,
            month: update.month,
            status: update.status.stored(),
            creditor_id: update.creditor_id,
            category_id: update.category_id,
            contract_id: update.contract_id,
            created_at: existing.created_at,
            paid_at: update.paid_at,
        };
        self.expense_repository.update_expense(expense).await
    }

    async fn delete_expense(&self, expense_id: String) -> Result<usize> {
        self.expense_repository.delete_expense(expense_id).await
    }

    fn dashboard(&self, available_balance: Decimal) -> Result<DashboardSummary> {
        let today = Utc::now().date_naive();
        let expenses = derive_statuses(self.expense_repository.load_expenses()?, today);
        Ok(DashboardSummary {
            metrics: dashboard_metrics(&expenses, available_balance, today),
            forecast: monthly_forecast(&expenses, today),
            by_type: type_split(&expenses),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::{DatabaseError, Error};
    use crate::expenses::ExpenseType;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;
    use std::sync::RwLock;

    struct MockExpenseRepository {
        expenses: RwLock<Vec<Expense>>,
    }

    #[async_trait]
    impl ExpenseRepositoryTrait for MockExpenseRepository {
        fn load_expenses(&self) -> Result<Vec<Expense>> {
            Ok(self.expenses.read().unwrap().clone())
        }

        fn find_expense(&self, expense_id: &str) -> Result<Expense> {
            self.expenses
                .read()
                .unwrap()
                .iter()
                .find(|e| e.id == expense_id)
                .cloned()
                .ok_or_else(|| {
                    Error::Database(DatabaseError::NotFound("expense not found".to_string()))
                })
        }

        async fn insert_expense(&self, expense: Expense) -> Result<Expense> {
            self.expenses.write().unwrap().push(expense.clone());
            Ok(expense)
        }

        async fn update_expense(&self, expense: Expense) -> Result<Expense> {
            let mut expenses = self.expenses.write().unwrap();
            let slot = expenses
                .iter_mut()
                .find(|e| e.id == expense.id)
                .expect("expense exists");
            *slot = expense.clone();
            Ok(expense)
        }

        async fn delete_expense(&self, expense_id: String) -> Result<usize> {
            let mut expenses = self.expenses.write().unwrap();
            let before = expenses.len();
            expenses.retain(|e| e.id != expense_id);
            Ok(before - expenses.len())
        }
    }

    fn service() -> ExpenseService {
        ExpenseService::new(Arc::new(MockExpenseRepository {
            expenses: RwLock::new(Vec::new()),
        }))
    }

    fn new_expense(description: &str, amount: Decimal) -> NewExpense {
        NewExpense {
            id: None,
            description: description.to_string(),
            amount,
            expense_type: ExpenseType::Variable,
            due_date: NaiveDate::from_ymd_opt(2026, 9, 1).unwrap(),
            month: "2026-09".to_string(),
            status: None,
            creditor_id: None,
            category_id: None,
            contract_id: None,
            created_at: None,
            paid_at: None,
        }
    }

    #[tokio::test]
    async fn create_defaults_status_to_pending() {
        let created = service()
            .create_expense(new_expense("electricity", dec!(420.50)))
            .await
            .unwrap();
        assert_eq!(created.status, ExpenseStatus::Pending);
        assert!(!created.id.is_empty());
    }

    #[tokio::test]
    async fn create_normalizes_overdue_to_pending() {
        let mut input = new_expense("water", dec!(90));
        input.status = Some(ExpenseStatus::Overdue);
        let created = service().create_expense(input).await.unwrap();
        assert_eq!(created.status, ExpenseStatus::Pending);
    }

    #[tokio::test]
    async fn create_rejects_blank_description_and_negative_amount() {
        assert!(service()
            .create_expense(new_expense("  ", dec!(10)))
            .await
            .is_err());
        assert!(service()
            .create_expense(new_expense("rent", dec!(-1)))
            .await
            .is_err());
    }

    #[tokio::test]
    async fn update_preserves_creation_timestamp() {
        let svc = service();
        let created = svc
            .create_expense(new_expense("internet link", dec!(350)))
            .await
            .unwrap();
        let updated = svc
            .update_expense(
                created.id.clone(),
                ExpenseUpdate {
                    description: "internet link".to_string(),
                    amount: dec!(370),
                    expense_type: ExpenseType::Fixed,
                    due_date: created.due_date,
                    month: created.month.clone(),
                    status: ExpenseStatus::Paid,
                    creditor_id: None,
                    category_id: None,
                    contract_id: None,
                    paid_at: Some(Utc::now()),
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.created_at, created.created_at);
        assert_eq!(updated.amount, dec!(370));
    }
}
