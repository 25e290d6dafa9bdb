//! Database model for categories.

use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use fiscus_core::categories::Category;
use fiscus_core::expenses::ExpenseType;

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
#[diesel(table_name = crate::schema::categories)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[diesel(treat_none_as_null = true)]
#[serde(rename_all = "camelCase")]
pub struct CategoryDB {
    pub id: String,
    pub name: String,
    pub category_type: String,
    pub color: Option<String>,
}

pub(crate) fn expense_type_to_str(expense_type: ExpenseType) -> &'static str {
    match expense_type {
        ExpenseType::Fixed => "fixed",
        ExpenseType::Variable => "variable",
    }
}

pub(crate) fn expense_type_from_str(value: &str) -> ExpenseType {
    match value {
        "fixed" => ExpenseType::Fixed,
        "variable" => ExpenseType::Variable,
        other => {
            log::error!("unknown expense type '{other}', treating as variable");
            ExpenseType::Variable
        }
    }
}

impl From<CategoryDB> for Category {
    fn from(db: CategoryDB) -> Self {
        Self {
            id: db.id,
            name: db.name,
            category_type: expense_type_from_str(&db.category_type),
            color: db.color,
        }
    }
}

impl From<Category> for CategoryDB {
    fn from(domain: Category) -> Self {
        Self {
            id: domain.id,
            name: domain.name,
            category_type: expense_type_to_str(domain.category_type).to_string(),
            color: domain.color,
        }
    }
}
