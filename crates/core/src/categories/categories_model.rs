use serde::{Deserialize, Serialize};

use crate::expenses::ExpenseType;

/// An expense category. The type ties the category to fixed or variable
/// spending; color is a display hint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub category_type: ExpenseType,
    #[serde(default)]
    pub color: Option<String>,
}

/// Input model for creating a new category.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCategory {
    pub id: Option<String>,
    pub name: String,
    #[serde(rename = "type")]
    pub category_type: ExpenseType,
    #[serde(default)]
    pub color: Option<String>,
}

/// Wholesale update of a category.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryUpdate {
    pub name: String,
    #[serde(rename = "type")]
    pub category_type: ExpenseType,
    #[serde(default)]
    pub color: Option<String>,
}
