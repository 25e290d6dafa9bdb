use async_trait::async_trait;

use crate::errors::Result;

use super::categories_model::{Category, CategoryUpdate, NewCategory};

/// Trait for category repository operations.
#[async_trait]
pub trait CategoryRepositoryTrait: Send + Sync {
    /// All categories ordered by name.
    fn load_categories(&self) -> Result<Vec<Category>>;
    fn find_category(&self, category_id: &str) -> Result<Category>;
    async fn insert_category(&self, category: Category) -> Result<Category>;
    async fn update_category(&self, category: Category) -> Result<Category>;
    async fn delete_category(&self, category_id: String) -> Result<usize>;
}

/// Trait for category service operations.
#[async_trait]
pub trait CategoryServiceTrait: Send + Sync {
    fn get_categories(&self) -> Result<Vec<Category>>;
    async fn create_category(&self, new_category: NewCategory) -> Result<Category>;
    async fn update_category(&self, category_id: String, update: CategoryUpdate)
        -> Result<Category>;
    async fn delete_category(&self, category_id: String) -> Result<usize>;
}
