use std::sync::Arc;

use async_trait::async_trait;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::constants::DEFAULT_UNIT;
use crate::errors::{Result, ValidationError};

use super::catalog_model::{CatalogItem, CatalogItemUpdate, NewCatalogItem};
use super::catalog_traits::{CatalogItemRepositoryTrait, CatalogItemServiceTrait};

pub struct CatalogItemService {
    catalog_repository: Arc<dyn CatalogItemRepositoryTrait>,
}

impl CatalogItemService {
    pub fn new(catalog_repository: Arc<dyn CatalogItemRepositoryTrait>) -> Self {
        CatalogItemService { catalog_repository }
    }

    fn validate(description: &str, unit_price: Option<Decimal>) -> Result<()> {
        if description.trim().is_empty() {
            return Err(ValidationError::MissingField("description".to_string()).into());
        }
        if unit_price.unwrap_or(Decimal::ZERO) < Decimal::ZERO {
            return Err(
                ValidationError::InvalidInput("unit price cannot be negative".to_string()).into(),
            );
        }
        Ok(())
    }
}

#[async_trait]
impl CatalogItemServiceTrait for CatalogItemService {
    fn get_catalog_items(&self) -> Result<Vec<CatalogItem>> {
        self.catalog_repository.load_catalog_items()
    }

    async fn create_catalog_item(&self, new_item: NewCatalogItem) -> Result<CatalogItem> {
        Self::validate(&new_item.description, new_item.unit_price)?;
        let item = CatalogItem {
            id: new_item.id.unwrap_or_else(|| Uuid::new_v4().to_string()),
            description: new_item.description,
            category: new_item.category,
            unit: new_item
                .unit
                .filter(|u| !u.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_UNIT.to_string()),
            unit_price: new_item.unit_price.unwrap_or(Decimal::ZERO),
            registry_catalog: new_item.registry_catalog,
            registry_class: new_item.registry_class,
            registry_subclass: new_item.registry_subclass,
            specification: new_item.specification,
            keywords: new_item.keywords,
            notes: new_item.notes,
        };
        self.catalog_repository.insert_catalog_item(item).await
    }

    async fn update_catalog_item(
        &self,
        item_id: String,
        update: CatalogItemUpdate,
    ) -> Result<CatalogItem> {
        Self::validate(&update.description, update.unit_price)?;
        let existing = self.catalog_repository.find_catalog_item(&item_id)?;
        let item = CatalogItem {
            id: existing.id,
            description: update.description,
            category: update.category,
            unit: update
                .unit
                .filter(|u| !u.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_UNIT.to_string()),
            unit_price: update.unit_price.unwrap_or(Decimal::ZERO),
            registry_catalog: update.registry_catalog,
            registry_class: update.registry_class,
            registry_subclass: update.registry_subclass,
            specification: update.specification,
            keywords: update.keywords,
            notes: update.notes,
        };
        self.catalog_repository.update_catalog_item(item).await
    }

    async fn delete_catalog_item(&self, item_id: String) -> Result<usize> {
        self.catalog_repository.delete_catalog_item(item_id).await
    }
}
