//! Contract balance accounting.
//!
//! Classifies how much of each contracted quantity remains and applies
//! consumption adjustments. Thresholds compare the *remaining fraction*
//! (`remaining / quantity`) and boundaries are inclusive on the tighter side:
//! exactly 10% left is `Critical`, exactly 30% left is `Warning`.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::{BALANCE_CRITICAL_THRESHOLD, BALANCE_WARNING_THRESHOLD};
use crate::errors::{Result, ValidationError};

use super::contracts_model::{ConsumptionAdjustment, Contract};

/// Classification of a contract item's remaining balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BalanceStatus {
    Ok,
    Warning,
    Critical,
    Exceeded,
}

/// Classify a contracted quantity against its consumption.
///
/// A zero contracted quantity always classifies `Ok`, regardless of the
/// consumed value.
pub fn classify(quantity: Decimal, consumed: Decimal) -> BalanceStatus {
    if quantity.is_zero() {
        return BalanceStatus::Ok;
    }
    if consumed > quantity {
        return BalanceStatus::Exceeded;
    }
    let remaining_fraction = (quantity - consumed) / quantity;
    if remaining_fraction <= BALANCE_CRITICAL_THRESHOLD {
        BalanceStatus::Critical
    } else if remaining_fraction <= BALANCE_WARNING_THRESHOLD {
        BalanceStatus::Warning
    } else {
        BalanceStatus::Ok
    }
}

/// Apply a consumption adjustment to a consumed quantity.
///
/// Reversal clamps at zero; forward consumption is deliberately not clamped
/// at the contracted quantity.
pub fn apply_adjustment(consumed: Decimal, adjustment: ConsumptionAdjustment) -> Result<Decimal> {
    match adjustment {
        ConsumptionAdjustment::Consume { amount } => {
            require_positive(amount)?;
            Ok(consumed + amount)
        }
        ConsumptionAdjustment::Reverse { amount } => {
            require_positive(amount)?;
            Ok((consumed - amount).max(Decimal::ZERO))
        }
        ConsumptionAdjustment::Set { amount } => {
            if amount < Decimal::ZERO {
                return Err(ValidationError::InvalidInput(
                    "consumed quantity cannot be negative".to_string(),
                )
                .into());
            }
            Ok(amount)
        }
    }
}

fn require_positive(amount: Decimal) -> Result<()> {
    if amount <= Decimal::ZERO {
        return Err(ValidationError::InvalidInput(
            "adjustment amount must be greater than zero".to_string(),
        )
        .into());
    }
    Ok(())
}

/// Per-item balance line of a report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemBalance {
    pub item_id: String,
    pub description: String,
    pub unit: String,
    pub quantity: Decimal,
    pub consumed: Decimal,
    /// Raw remaining balance; negative when consumption exceeded the
    /// contracted quantity.
    pub remaining: Decimal,
    pub status: BalanceStatus,
}

/// Financial rollup of a contract's item balances. All values are derived,
/// never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceReport {
    pub contract_id: String,
    pub number: String,
    pub items: Vec<ItemBalance>,
    /// Sum of `quantity * unit_price` over all items.
    pub contracted_value: Decimal,
    /// Sum of `consumed * unit_price` over all items.
    pub consumed_value: Decimal,
    /// Sum of `max(0, quantity - consumed) * unit_price`; over-consumed
    /// items contribute zero.
    pub remaining_value: Decimal,
}

impl BalanceReport {
    pub fn for_contract(contract: &Contract) -> Self {
        let mut contracted_value = Decimal::ZERO;
        let mut consumed_value = Decimal::ZERO;
        let mut remaining_value = Decimal::ZERO;

        let items = contract
            .items
            .iter()
            .map(|item| {
                contracted_value += item.quantity * item.unit_price;
                consumed_value += item.consumed * item.unit_price;
                remaining_value += item.remaining().max(Decimal::ZERO) * item.unit_price;
                ItemBalance {
                    item_id: item.id.clone(),
                    description: item.description.clone(),
                    unit: item.unit.clone(),
                    quantity: item.quantity,
                    consumed: item.consumed,
                    remaining: item.remaining(),
                    status: classify(item.quantity, item.consumed),
                }
            })
            .collect();

        BalanceReport {
            contract_id: contract.id.clone(),
            number: contract.number.clone(),
            items,
            contracted_value,
            consumed_value,
            remaining_value,
        }
    }
}
