//! Contract expiry alerting.
//!
//! Flags non-terminal contracts approaching their end date. The two reminder
//! kinds are evaluated independently; a contract may emit both at once.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::contracts_model::Contract;

/// Which reminder threshold fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AlertKind {
    NewContract,
    Additive,
}

/// An expiry alert for one contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractAlert {
    pub contract_id: String,
    pub number: String,
    pub description: String,
    pub kind: AlertKind,
    pub days_left: i64,
    pub end_date: NaiveDate,
}

/// Compute expiry alerts for `contracts` as of `today` (date-only precision).
pub fn expiry_alerts(contracts: &[Contract], today: NaiveDate) -> Vec<ContractAlert> {
    let mut alerts = Vec::new();
    for contract in contracts {
        if contract.status.is_terminal() {
            continue;
        }
        let days_left = (contract.end_date - today).num_days();
        if days_left < 0 {
            continue;
        }
        if let Some(threshold) = contract.alert_new_contract {
            if days_left <= threshold {
                alerts.push(alert_for(contract, AlertKind::NewContract, days_left));
            }
        }
        if let Some(threshold) = contract.alert_additive {
            if days_left <= threshold {
                alerts.push(alert_for(contract, AlertKind::Additive, days_left));
            }
        }
    }
    alerts
}

fn alert_for(contract: &Contract, kind: AlertKind, days_left: i64) -> ContractAlert {
    ContractAlert {
        contract_id: contract.id.clone(),
        number: contract.number.clone(),
        description: contract.description.clone(),
        kind,
        days_left,
        end_date: contract.end_date,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contracts::contracts_model::ContractStatus;
    use chrono::{Duration, TimeZone, Utc};

    fn contract(
        status: ContractStatus,
        end_date: NaiveDate,
        alert_new_contract: Option<i64>,
        alert_additive: Option<i64>,
    ) -> Contract {
        Contract {
            id: "c1".to_string(),
            number: "014/2026".to_string(),
            description: "cleaning services".to_string(),
            creditor_id: None,
            status,
            start_date: end_date - Duration::days(365),
            end_date,
            notes: String::new(),
            alert_new_contract,
            alert_additive,
            created_at: Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap(),
            items: Vec::new(),
        }
    }

    #[test]
    fn fires_only_thresholds_that_cover_days_left() {
        let today = NaiveDate::from_ymd_opt(2026, 8, 1).unwrap();
        let c = contract(
            ContractStatus::Active,
            today + Duration::days(20),
            Some(30),
            Some(10),
        );
        let alerts = expiry_alerts(&[c], today);
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].kind, AlertKind::NewContract);
        assert_eq!(alerts[0].days_left, 20);
    }

    #[test]
    fn both_kinds_may_fire_for_one_contract() {
        let today = NaiveDate::from_ymd_opt(2026, 8, 1).unwrap();
        let c = contract(
            ContractStatus::Active,
            today + Duration::days(5),
            Some(30),
            Some(10),
        );
        let alerts = expiry_alerts(&[c], today);
        let kinds: Vec<AlertKind> = alerts.iter().map(|a| a.kind).collect();
        assert_eq!(kinds, vec![AlertKind::NewContract, AlertKind::Additive]);
    }

    #[test]
    fn ending_today_still_alerts() {
        let today = NaiveDate::from_ymd_opt(2026, 8, 1).unwrap();
        let c = contract(ContractStatus::Pending, today, Some(30), None);
        let alerts = expiry_alerts(&[c], today);
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].days_left, 0);
    }

    #[test]
    fn past_end_dates_and_terminal_statuses_are_silent() {
        let today = NaiveDate::from_ymd_opt(2026, 8, 1).unwrap();
        let past = contract(
            ContractStatus::Active,
            today - Duration::days(1),
            Some(30),
            Some(30),
        );
        let cancelled = contract(
            ContractStatus::Cancelled,
            today + Duration::days(5),
            Some(30),
            Some(30),
        );
        let expired = contract(
            ContractStatus::Expired,
            today + Duration::days(5),
            Some(30),
            Some(30),
        );
        assert!(expiry_alerts(&[past, cancelled, expired], today).is_empty());
    }

    #[test]
    fn unset_thresholds_never_fire() {
        let today = NaiveDate::from_ymd_opt(2026, 8, 1).unwrap();
        let c = contract(ContractStatus::Active, today + Duration::days(2), None, None);
        assert!(expiry_alerts(&[c], today).is_empty());
    }
}
