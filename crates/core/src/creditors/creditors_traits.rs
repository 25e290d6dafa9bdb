use async_trait::async_trait;

use crate::errors::Result;

use super::creditors_model::{Creditor, CreditorUpdate, NewCreditor};

/// Trait for creditor repository operations.
#[async_trait]
pub trait CreditorRepositoryTrait: Send + Sync {
    /// All creditors ordered by name.
    fn load_creditors(&self) -> Result<Vec<Creditor>>;
    fn find_creditor(&self, creditor_id: &str) -> Result<Creditor>;
    async fn insert_creditor(&self, creditor: Creditor) -> Result<Creditor>;
    async fn update_creditor(&self, creditor: Creditor) -> Result<Creditor>;
    async fn delete_creditor(&self, creditor_id: String) -> Result<usize>;
}

/// Trait for creditor service operations.
#[async_trait]
pub trait CreditorServiceTrait: Send + Sync {
    fn get_creditors(&self) -> Result<Vec<Creditor>>;
    async fn create_creditor(&self, new_creditor: NewCreditor) -> Result<Creditor>;
    async fn update_creditor(&self, creditor_id: String, update: CreditorUpdate)
        -> Result<Creditor>;
    async fn delete_creditor(&self, creditor_id: String) -> Result<usize>;
}
