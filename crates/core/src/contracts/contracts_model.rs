//! Contract domain models.
//!
//! Contract items are embedded in the contract document itself; there is no
//! independent item-level storage. Every consumption mutation replaces the
//! contract's full item list.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Lifecycle status of a contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContractStatus {
    Active,
    Pending,
    Expired,
    Cancelled,
}

impl ContractStatus {
    /// Terminal contracts are excluded from expiry alerting.
    pub fn is_terminal(&self) -> bool {
        matches!(self, ContractStatus::Expired | ContractStatus::Cancelled)
    }
}

/// A contracted line item with its running consumption.
///
/// `consumed` starts at zero and is only moved by explicit operations; the
/// remaining balance (`quantity - consumed`) is derived, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractItem {
    pub id: String,
    #[serde(default)]
    pub catalog_item_id: Option<String>,
    pub description: String,
    pub unit: String,
    pub quantity: Decimal,
    pub unit_price: Decimal,
    #[serde(default)]
    pub consumed: Decimal,
}

impl ContractItem {
    pub fn remaining(&self) -> Decimal {
        self.quantity - self.consumed
    }
}

/// Domain model representing a contract with its embedded item list.
///
/// Item order is insertion order and item ids are unique within a contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contract {
    pub id: String,
    pub number: String,
    pub description: String,
    #[serde(default)]
    pub creditor_id: Option<String>,
    pub status: ContractStatus,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default)]
    pub notes: String,
    /// Days before `end_date` at which a "new contract" reminder fires.
    #[serde(default)]
    pub alert_new_contract: Option<i64>,
    /// Days before `end_date` at which an "additive" reminder fires.
    #[serde(default)]
    pub alert_additive: Option<i64>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub items: Vec<ContractItem>,
}

/// Input form of a contract item, as submitted on create/update.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractItemInput {
    pub id: Option<String>,
    #[serde(default)]
    pub catalog_item_id: Option<String>,
    pub description: String,
    pub unit: String,
    pub quantity: Decimal,
    pub unit_price: Decimal,
    #[serde(default)]
    pub consumed: Option<Decimal>,
}

/// Input model for creating a new contract.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewContract {
    pub id: Option<String>,
    pub number: String,
    pub description: String,
    #[serde(default)]
    pub creditor_id: Option<String>,
    pub status: ContractStatus,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub alert_new_contract: Option<i64>,
    #[serde(default)]
    pub alert_additive: Option<i64>,
    #[serde(default)]
    pub items: Vec<ContractItemInput>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Wholesale update of a contract; the item list is replaced as given.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractUpdate {
    pub number: String,
    pub description: String,
    #[serde(default)]
    pub creditor_id: Option<String>,
    pub status: ContractStatus,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub alert_new_contract: Option<i64>,
    #[serde(default)]
    pub alert_additive: Option<i64>,
    #[serde(default)]
    pub items: Vec<ContractItemInput>,
}

/// A single consumption adjustment against one contract item.
///
/// `Consume` adds to the consumed quantity with no upper clamp; exceeding the
/// contracted quantity is surfaced by the `Exceeded` classification rather
/// than prevented. `Reverse` subtracts, clamped at zero. `Set` stores an
/// absolute value.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "lowercase")]
pub enum ConsumptionAdjustment {
    Consume { amount: Decimal },
    Reverse { amount: Decimal },
    Set { amount: Decimal },
}

/// One entry of a batch consumption write; the batch commits atomically.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsumptionEntry {
    pub contract_id: String,
    pub item_id: String,
    #[serde(flatten)]
    pub adjustment: ConsumptionAdjustment,
}
