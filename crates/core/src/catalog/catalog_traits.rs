use async_trait::async_trait;

use crate::errors::Result;

use super::catalog_model::{CatalogItem, CatalogItemUpdate, NewCatalogItem};

/// Trait for catalog item repository operations.
#[async_trait]
pub trait CatalogItemRepositoryTrait: Send + Sync {
    /// All catalog items ordered by description.
    fn load_catalog_items(&self) -> Result<Vec<CatalogItem>>;
    fn find_catalog_item(&self, item_id: &str) -> Result<CatalogItem>;
    async fn insert_catalog_item(&self, item: CatalogItem) -> Result<CatalogItem>;
    async fn update_catalog_item(&self, item: CatalogItem) -> Result<CatalogItem>;
    async fn delete_catalog_item(&self, item_id: String) -> Result<usize>;
}

/// Trait for catalog item service operations.
#[async_trait]
pub trait CatalogItemServiceTrait: Send + Sync {
    fn get_catalog_items(&self) -> Result<Vec<CatalogItem>>;
    async fn create_catalog_item(&self, new_item: NewCatalogItem) -> Result<CatalogItem>;
    async fn update_catalog_item(
        &self,
        item_id: String,
        update: CatalogItemUpdate,
    ) -> Result<CatalogItem>;
    async fn delete_catalog_item(&self, item_id: String) -> Result<usize>;
}
