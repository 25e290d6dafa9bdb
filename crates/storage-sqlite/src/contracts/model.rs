//! Database model for contracts.

use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use fiscus_core::contracts::{Contract, ContractItem, ContractStatus};

use crate::utils::{parse_datetime_utc, parse_naive_date};

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
#[diesel(table_name = crate::schema::contracts)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[diesel(treat_none_as_null = true)]
#[serde(rename_all = "camelCase")]
pub struct ContractDB {
    pub id: String,
    pub number: String,
    pub description: String,
    pub creditor_id: Option<String>,
    pub status: String,
    pub start_date: String,
    pub end_date: String,
    pub notes: String,
    pub alert_new_contract: Option<i64>,
    pub alert_additive: Option<i64>,
    pub created_at: String,
    /// JSON array of the embedded contract items.
    pub items: String,
}

fn status_to_str(status: ContractStatus) -> &'static str {
    match status {
        ContractStatus::Active => "active",
        ContractStatus::Pending => "pending",
        ContractStatus::Expired => "expired",
        ContractStatus::Cancelled => "cancelled",
    }
}

fn status_from_str(value: &str) -> ContractStatus {
    match value {
        "active" => ContractStatus::Active,
        "pending" => ContractStatus::Pending,
        "expired" => ContractStatus::Expired,
        "cancelled" => ContractStatus::Cancelled,
        other => {
            log::error!("unknown contract status '{other}', treating as pending");
            ContractStatus::Pending
        }
    }
}

pub(crate) fn serialize_items(items: &[ContractItem]) -> String {
    serde_json::to_string(items).unwrap_or_else(|e| {
        log::error!("failed to serialize contract items: {e}");
        "[]".to_string()
    })
}

fn deserialize_items(contract_id: &str, raw: &str) -> Vec<ContractItem> {
    serde_json::from_str(raw).unwrap_or_else(|e| {
        log::error!("failed to parse items for contract '{contract_id}': {e}");
        Vec::new()
    })
}

impl From<ContractDB> for Contract {
    fn from(db: ContractDB) -> Self {
        let items = deserialize_items(&db.id, &db.items);
        Self {
            id: db.id,
            number: db.number,
            description: db.description,
            creditor_id: db.creditor_id,
            status: status_from_str(&db.status),
            start_date: parse_naive_date(&db.start_date, "start_date"),
            end_date: parse_naive_date(&db.end_date, "end_date"),
            notes: db.notes,
            alert_new_contract: db.alert_new_contract,
            alert_additive: db.alert_additive,
            created_at: parse_datetime_utc(&db.created_at, "created_at"),
            items,
        }
    }
}

impl From<Contract> for ContractDB {
    fn from(domain: Contract) -> Self {
        Self {
            id: domain.id,
            number: domain.number,
            description: domain.description,
            creditor_id: domain.creditor_id,
            status: status_to_str(domain.status).to_string(),
            start_date: domain.start_date.format("%Y-%m-%d").to_string(),
            end_date: domain.end_date.format("%Y-%m-%d").to_string(),
            notes: domain.notes,
            alert_new_contract: domain.alert_new_contract,
            alert_additive: domain.alert_additive,
            created_at: domain.created_at.to_rfc3339(),
            items: serialize_items(&domain.items),
        }
    }
}
