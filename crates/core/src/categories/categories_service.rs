use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::errors::{Result, ValidationError};

use super::categories_model::{Category, CategoryUpdate, NewCategory};
use super::categories_traits::{CategoryRepositoryTrait, CategoryServiceTrait};

pub struct CategoryService {
    category_repository: Arc<dyn CategoryRepositoryTrait>,
}

impl CategoryService {
    pub fn new(category_repository: Arc<dyn CategoryRepositoryTrait>) -> Self {
        CategoryService {
            category_repository,
        }
    }
}

#[async_trait]
impl CategoryServiceTrait for CategoryService {
    fn get_categories(&self) -> Result<Vec<Category>> {
        self.category_repository.load_categories()
    }

    async fn create_category(&self, new_category: NewCategory) -> Result<Category> {
        if new_category.name.trim().is_empty() {
            return Err(ValidationError::MissingField("name".to_string()).into());
        }
        let category = Category {
            id: new_category.id.unwrap_or_else(|| Uuid::new_v4().to_string()),
            name: new_category.name,
            category_type: new_category.category_type,
            color: new_category.color,
        };
        self.category_repository.insert_category(category).await
    }

    async fn update_category(
        &self,
        category_id: String,
        update: CategoryUpdate,
    ) -> Result<Category> {
        if update.name.trim().is_empty() {
            return Err(ValidationError::MissingField("name".to_string()).into());
        }
        let existing = self.category_repository.find_category(&category_id)?;
        let category = Category {
            id: existing.id,
            name: update.name,
            category_type: update.category_type,
            color: update.color,
        };
        self.category_repository.update_category(category).await
    }

    async fn delete_category(&self, category_id: String) -> Result<usize> {
        self.category_repository.delete_category(category_id).await
    }
}
