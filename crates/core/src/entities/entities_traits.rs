use async_trait::async_trait;

use crate::errors::Result;

use super::entities_model::{NewOrgEntity, OrgEntity, OrgEntityUpdate};

/// Trait for organization profile repository operations.
#[async_trait]
pub trait OrgEntityRepositoryTrait: Send + Sync {
    fn load_entities(&self) -> Result<Vec<OrgEntity>>;
    fn find_entity(&self, entity_id: &str) -> Result<OrgEntity>;
    fn count_entities(&self) -> Result<i64>;
    async fn insert_entity(&self, entity: OrgEntity) -> Result<OrgEntity>;
    async fn update_entity(&self, entity: OrgEntity) -> Result<OrgEntity>;
    async fn delete_entity(&self, entity_id: String) -> Result<usize>;
}

/// Trait for organization profile service operations.
#[async_trait]
pub trait OrgEntityServiceTrait: Send + Sync {
    fn get_entities(&self) -> Result<Vec<OrgEntity>>;
    /// Creates the profile; fails with a conflict when one already exists and
    /// with payload-too-large when the embedded images exceed the budget.
    async fn create_entity(&self, new_entity: NewOrgEntity) -> Result<OrgEntity>;
    async fn update_entity(&self, entity_id: String, update: OrgEntityUpdate) -> Result<OrgEntity>;
    async fn delete_entity(&self, entity_id: String) -> Result<usize>;
}
