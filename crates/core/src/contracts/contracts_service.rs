use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::errors::{Error, Result, ValidationError};

use super::balance::{apply_adjustment, BalanceReport};
use super::contracts_model::{
    ConsumptionAdjustment, ConsumptionEntry, Contract, ContractItem, ContractItemInput,
    ContractUpdate, NewContract,
};
use super::contracts_traits::{ContractRepositoryTrait, ContractServiceTrait};
use super::{expiry_alerts, ContractAlert};

pub struct ContractService {
    contract_repository: Arc<dyn ContractRepositoryTrait>,
}

impl ContractService {
    pub fn new(contract_repository: Arc<dyn ContractRepositoryTrait>) -> Self {
        ContractService {
            contract_repository,
        }
    }

    /// Turn submitted item inputs into stored items: missing ids get a UUID,
    /// missing consumption defaults to zero. Item ids must be unique within
    /// the contract and quantities non-negative.
    fn materialize_items(inputs: Vec<ContractItemInput>) -> Result<Vec<ContractItem>> {
        let mut items = Vec::with_capacity(inputs.len());
        for input in inputs {
            if input.description.trim().is_empty() {
                return Err(ValidationError::MissingField("description".to_string()).into());
            }
            if input.quantity < Decimal::ZERO
                || input.unit_price < Decimal::ZERO
                || input.consumed.unwrap_or(Decimal::ZERO) < Decimal::ZERO
            {
                return Err(ValidationError::InvalidInput(
                    "item quantities and prices cannot be negative".to_string(),
                )
                .into());
            }
            items.push(ContractItem {
                id: input.id.unwrap_or_else(|| Uuid::new_v4().to_string()),
                catalog_item_id: input.catalog_item_id,
                description: input.description,
                unit: input.unit,
                quantity: input.quantity,
                unit_price: input.unit_price,
                consumed: input.consumed.unwrap_or(Decimal::ZERO),
            });
        }

        for (index, item) in items.iter().enumerate() {
            if items[..index].iter().any(|other| other.id == item.id) {
                return Err(ValidationError::InvalidInput(format!(
                    "duplicate item id '{}' within contract",
                    item.id
                ))
                .into());
            }
        }
        Ok(items)
    }

    fn validate_header(number: &str, description: &str) -> Result<()> {
        if number.trim().is_empty() {
            return Err(ValidationError::MissingField("number".to_string()).into());
        }
        if description.trim().is_empty() {
            return Err(ValidationError::MissingField("description".to_string()).into());
        }
        Ok(())
    }

    fn adjusted_items(
        contract: &Contract,
        item_id: &str,
        adjustment: ConsumptionAdjustment,
    ) -> Result<Vec<ContractItem>> {
        let mut items = contract.items.clone();
        let item = items
            .iter_mut()
            .find(|item| item.id == item_id)
            .ok_or_else(|| {
                Error::Database(crate::errors::DatabaseError::NotFound(format!(
                    "contract item '{item_id}' not found"
                )))
            })?;
        item.consumed = apply_adjustment(item.consumed, adjustment)?;
        Ok(items)
    }
}

#[async_trait]
impl ContractServiceTrait for ContractService {
    fn get_contracts(&self) -> Result<Vec<Contract>> {
        self.contract_repository.load_contracts()
    }

    fn get_contract(&self, contract_id: &str) -> Result<Contract> {
        self.contract_repository.find_contract(contract_id)
    }

    async fn create_contract(&self, new_contract: NewContract) -> Result<Contract> {
        Self::validate_header(&new_contract.number, &new_contract.description)?;
        let contract = Contract {
            id: new_contract
                .id
                .unwrap_or_else(|| Uuid::new_v4().to_string()),
            number: new_contract.number,
            description: new_contract.description,
            creditor_id: new_contract.creditor_id,
            status: new_contract.status,
            start_date: new_contract.start_date,
            end_date: new_contract.end_date,
            notes: new_contract.notes.unwrap_or_default(),
            alert_new_contract: new_contract.alert_new_contract,
            alert_additive: new_contract.alert_additive,
            created_at: new_contract.created_at.unwrap_or_else(Utc::now),
            items: Self::materialize_items(new_contract.items)?,
        };
        self.contract_repository.insert_contract(contract).await
    }

    async fn update_contract(
        &self,
        contract_id: String,
        update: ContractUpdate,
    ) -> Result<Contract> {
        Self::validate_header(&update.number, &update.description)?;
        let existing = self.contract_repository.find_contract(&contract_id)?;
        let contract = Contract {
            id: existing.id,
            number: update.number,
            description: update.description,
            creditor_id: update.creditor_id,
            status: update.status,
            start_date: update.start_date,
            end_date: update.end_date,
            notes: update.notes.unwrap_or_default(),
            alert_new_contract: update.alert_new_contract,
            alert_additive: update.alert_additive,
            created_at: existing.created_at,
            items: Self::materialize_items(update.items)?,
        };
        self.contract_repository.update_contract(contract).await
    }

    async fn delete_contract(&self, contract_id: String) -> Result<usize> {
        self.contract_repository.delete_contract(contract_id).await
    }

    async fn adjust_consumption(
        &self,
        contract_id: &str,
        item_id: &str,
        adjustment: ConsumptionAdjustment,
    ) -> Result<ContractItem> {
        let contract = self.contract_repository.find_contract(contract_id)?;
        let items = Self::adjusted_items(&contract, item_id, adjustment)?;
        let updated = self
            .contract_repository
            .replace_items(contract_id.to_string(), items)
            .await?;
        updated
            .items
            .into_iter()
            .find(|item| item.id == item_id)
            .ok_or_else(|| {
                Error::Database(crate::errors::DatabaseError::NotFound(format!(
                    "contract item '{item_id}' not found"
                )))
            })
    }

    async fn adjust_consumption_batch(&self, entries: Vec<ConsumptionEntry>) -> Result<usize> {
        // Fold every entry into an in-memory working copy first so that one
        // invalid entry rejects the whole batch before anything is written.
        let mut touched: Vec<(String, Contract)> = Vec::new();
        for entry in entries {
            let position = touched
                .iter()
                .position(|(contract_id, _)| *contract_id == entry.contract_id);
            let index = match position {
                Some(index) => index,
                None => {
                    let loaded = self.contract_repository.find_contract(&entry.contract_id)?;
                    touched.push((entry.contract_id.clone(), loaded));
                    touched.len() - 1
                }
            };
            touched[index].1.items =
                Self::adjusted_items(&touched[index].1, &entry.item_id, entry.adjustment)?;
        }

        if touched.is_empty() {
            return Ok(0);
        }
        let batches = touched
            .into_iter()
            .map(|(contract_id, contract)| (contract_id, contract.items))
            .collect();
        self.contract_repository.replace_items_batch(batches).await
    }

    fn balance_report(&self, contract_id: &str) -> Result<BalanceReport> {
        let contract = self.contract_repository.find_contract(contract_id)?;
        Ok(BalanceReport::for_contract(&contract))
    }

    fn expiry_alerts(&self) -> Result<Vec<ContractAlert>> {
        let contracts = self.contract_repository.load_contracts()?;
        Ok(expiry_alerts(&contracts, Utc::now().date_naive()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contracts::contracts_model::ContractStatus;
    use crate::contracts::BalanceStatus;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;
    use std::sync::RwLock;

    struct MockContractRepository {
        contracts: RwLock<Vec<Contract>>,
    }

    impl MockContractRepository {
        fn new(contracts: Vec<Contract>) -> Self {
            Self {
                contracts: RwLock::new(contracts),
            }
        }
    }

    #[async_trait]
    impl ContractRepositoryTrait for MockContractRepository {
        fn load_contracts(&self) -> Result<Vec<Contract>> {
            Ok(self.contracts.read().unwrap().clone())
        }

        fn find_contract(&self, contract_id: &str) -> Result<Contract> {
            self.contracts
                .read()
                .unwrap()
                .iter()
                .find(|c| c.id == contract_id)
                .cloned()
                .ok_or_else(|| {
                    Error::Database(crate::errors::DatabaseError::NotFound(
                        "contract not found".to_string(),
                    ))
                })
        }

        async fn insert_contract(&self, contract: Contract) -> Result<Contract> {
            self.contracts.write().unwrap().push(contract.clone());
            Ok(contract)
        }

        async fn update_contract(&self, contract: Contract) -> Result<Contract> {
            let mut contracts = self.contracts.write().unwrap();
            let slot = contracts
                .iter_mut()
                .find(|c| c.id == contract.id)
                .expect("contract exists");
            *slot = contract.clone();
            Ok(contract)
        }

        async fn delete_contract(&self, contract_id: String) -> Result<usize> {
            let mut contracts = self.contracts.write().unwrap();
            let before = contracts.len();
            contracts.retain(|c| c.id != contract_id);
            Ok(before - contracts.len())
        }

        async fn replace_items(
            &self,
            contract_id: String,
            items: Vec<ContractItem>,
        ) -> Result<Contract> {
            let mut contracts = self.contracts.write().unwrap();
            let contract = contracts
                .iter_mut()
                .find(|c| c.id == contract_id)
                .expect("contract exists");
            contract.items = items;
            Ok(contract.clone())
        }

        async fn replace_items_batch(
            &self,
            batches: Vec<(String, Vec<ContractItem>)>,
        ) -> Result<usize> {
            let mut contracts = self.contracts.write().unwrap();
            let written = batches.len();
            for (contract_id, items) in batches {
                let contract = contracts
                    .iter_mut()
                    .find(|c| c.id == contract_id)
                    .expect("contract exists");
                contract.items = items;
            }
            Ok(written)
        }
    }

    fn new_contract_input(items: Vec<ContractItemInput>) -> NewContract {
        NewContract {
            id: None,
            number: "007/2026".to_string(),
            description: "office supplies".to_string(),
            creditor_id: None,
            status: ContractStatus::Active,
            start_date: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2026, 12, 31).unwrap(),
            notes: None,
            alert_new_contract: None,
            alert_additive: None,
            items,
            created_at: None,
        }
    }

    fn item_input(id: Option<&str>, quantity: Decimal) -> ContractItemInput {
        ContractItemInput {
            id: id.map(|s| s.to_string()),
            catalog_item_id: None,
            description: "A4 paper".to_string(),
            unit: "rm".to_string(),
            quantity,
            unit_price: dec!(5),
            consumed: None,
        }
    }

    fn service_with(contracts: Vec<Contract>) -> ContractService {
        ContractService::new(Arc::new(MockContractRepository::new(contracts)))
    }

    #[tokio::test]
    async fn create_assigns_ids_and_defaults_consumed_to_zero() {
        let service = service_with(Vec::new());
        let created = service
            .create_contract(new_contract_input(vec![item_input(None, dec!(10))]))
            .await
            .unwrap();
        assert!(!created.id.is_empty());
        assert!(!created.items[0].id.is_empty());
        assert_eq!(created.items[0].consumed, Decimal::ZERO);
    }

    #[tokio::test]
    async fn create_rejects_duplicate_item_ids() {
        let service = service_with(Vec::new());
        let result = service
            .create_contract(new_contract_input(vec![
                item_input(Some("dup"), dec!(10)),
                item_input(Some("dup"), dec!(4)),
            ]))
            .await;
        assert!(matches!(result, Err(Error::Validation(_))));
    }

    #[tokio::test]
    async fn consume_then_reverse_round_trips() {
        let service = service_with(Vec::new());
        let created = service
            .create_contract(new_contract_input(vec![item_input(None, dec!(10))]))
            .await
            .unwrap();
        let item_id = created.items[0].id.clone();

        let item = service
            .adjust_consumption(
                &created.id,
                &item_id,
                ConsumptionAdjustment::Consume { amount: dec!(3) },
            )
            .await
            .unwrap();
        assert_eq!(item.consumed, dec!(3));

        let item = service
            .adjust_consumption(
                &created.id,
                &item_id,
                ConsumptionAdjustment::Reverse { amount: dec!(3) },
            )
            .await
            .unwrap();
        assert_eq!(item.consumed, Decimal::ZERO);

        let report = service.balance_report(&created.id).unwrap();
        assert_eq!(report.items[0].status, BalanceStatus::Ok);
    }

    #[tokio::test]
    async fn adjusting_unknown_item_is_not_found() {
        let service = service_with(Vec::new());
        let created = service
            .create_contract(new_contract_input(vec![item_input(None, dec!(10))]))
            .await
            .unwrap();
        let result = service
            .adjust_consumption(
                &created.id,
                "missing",
                ConsumptionAdjustment::Consume { amount: dec!(1) },
            )
            .await;
        assert!(matches!(
            result,
            Err(Error::Database(crate::errors::DatabaseError::NotFound(_)))
        ));
    }

    #[tokio::test]
    async fn batch_folds_repeated_entries_before_writing() {
        let service = service_with(Vec::new());
        let created = service
            .create_contract(new_contract_input(vec![item_input(Some("a"), dec!(100))]))
            .await
            .unwrap();

        let written = service
            .adjust_consumption_batch(vec![
                ConsumptionEntry {
                    contract_id: created.id.clone(),
                    item_id: "a".to_string(),
                    adjustment: ConsumptionAdjustment::Consume { amount: dec!(40) },
                },
                ConsumptionEntry {
                    contract_id: created.id.clone(),
                    item_id: "a".to_string(),
                    adjustment: ConsumptionAdjustment::Consume { amount: dec!(25) },
                },
            ])
            .await
            .unwrap();
        assert_eq!(written, 1);

        let contract = service.get_contract(&created.id).unwrap();
        assert_eq!(contract.items[0].consumed, dec!(65));
    }

    #[tokio::test]
    async fn batch_rejects_all_when_one_entry_is_invalid() {
        let service = service_with(Vec::new());
        let created = service
            .create_contract(new_contract_input(vec![item_input(Some("a"), dec!(100))]))
            .await
            .unwrap();

        let result = service
            .adjust_consumption_batch(vec![
                ConsumptionEntry {
                    contract_id: created.id.clone(),
                    item_id: "a".to_string(),
                    adjustment: ConsumptionAdjustment::Consume { amount: dec!(40) },
                },
                ConsumptionEntry {
                    contract_id: created.id.clone(),
                    item_id: "a".to_string(),
                    adjustment: ConsumptionAdjustment::Consume { amount: dec!(0) },
                },
            ])
            .await;
        assert!(result.is_err());

        let contract = service.get_contract(&created.id).unwrap();
        assert_eq!(contract.items[0].consumed, Decimal::ZERO);
    }
}
