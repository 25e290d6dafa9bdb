use async_trait::async_trait;

use crate::errors::Result;

use super::balance::BalanceReport;
use super::contracts_model::{
    ConsumptionAdjustment, ConsumptionEntry, Contract, ContractItem, ContractUpdate, NewContract,
};
use super::ContractAlert;

/// Trait for contract repository operations.
///
/// Contract items live inside the contract document; `replace_items` swaps a
/// contract's full item list, and the batch form runs every replacement in a
/// single transaction.
#[async_trait]
pub trait ContractRepositoryTrait: Send + Sync {
    fn load_contracts(&self) -> Result<Vec<Contract>>;
    fn find_contract(&self, contract_id: &str) -> Result<Contract>;
    async fn insert_contract(&self, contract: Contract) -> Result<Contract>;
    async fn update_contract(&self, contract: Contract) -> Result<Contract>;
    async fn delete_contract(&self, contract_id: String) -> Result<usize>;
    async fn replace_items(&self, contract_id: String, items: Vec<ContractItem>)
        -> Result<Contract>;
    async fn replace_items_batch(&self, batches: Vec<(String, Vec<ContractItem>)>)
        -> Result<usize>;
}

/// Trait for contract service operations.
#[async_trait]
pub trait ContractServiceTrait: Send + Sync {
    fn get_contracts(&self) -> Result<Vec<Contract>>;
    fn get_contract(&self, contract_id: &str) -> Result<Contract>;
    async fn create_contract(&self, new_contract: NewContract) -> Result<Contract>;
    async fn update_contract(&self, contract_id: String, update: ContractUpdate)
        -> Result<Contract>;
    async fn delete_contract(&self, contract_id: String) -> Result<usize>;
    /// Apply one consumption adjustment and return the updated item.
    async fn adjust_consumption(
        &self,
        contract_id: &str,
        item_id: &str,
        adjustment: ConsumptionAdjustment,
    ) -> Result<ContractItem>;
    /// Apply a batch of adjustments atomically; returns the number of
    /// contracts written.
    async fn adjust_consumption_batch(&self, entries: Vec<ConsumptionEntry>) -> Result<usize>;
    fn balance_report(&self, contract_id: &str) -> Result<BalanceReport>;
    fn expiry_alerts(&self) -> Result<Vec<ContractAlert>>;
}
