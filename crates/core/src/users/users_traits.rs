use async_trait::async_trait;

use crate::errors::Result;

use super::users_model::{NewUser, User, UserUpdate};

/// Trait for user repository operations.
#[async_trait]
pub trait UserRepositoryTrait: Send + Sync {
    /// All users ordered by name.
    fn load_users(&self) -> Result<Vec<User>>;
    fn find_user(&self, user_id: &str) -> Result<User>;
    fn find_user_by_email(&self, email: &str) -> Result<Option<User>>;
    fn count_users(&self) -> Result<i64>;
    async fn insert_user(&self, user: User) -> Result<User>;
    async fn update_user(&self, user: User) -> Result<User>;
    async fn delete_user(&self, user_id: String) -> Result<usize>;
}

/// Trait for user service operations.
#[async_trait]
pub trait UserServiceTrait: Send + Sync {
    fn get_users(&self) -> Result<Vec<User>>;
    /// Lookup for credential verification; `None` when the email is unknown.
    fn get_user_by_email(&self, email: &str) -> Result<Option<User>>;
    /// Creates an account; duplicate emails conflict.
    async fn create_user(&self, new_user: NewUser) -> Result<User>;
    async fn update_user(&self, user_id: String, update: UserUpdate) -> Result<User>;
    /// Deletes an account; the last remaining user cannot be removed.
    async fn delete_user(&self, user_id: String) -> Result<usize>;
}
