use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::errors::{Error, Result, ValidationError};

use super::users_model::{NewUser, User, UserUpdate};
use super::users_traits::{UserRepositoryTrait, UserServiceTrait};

pub struct UserService {
    user_repository: Arc<dyn UserRepositoryTrait>,
}

impl UserService {
    pub fn new(user_repository: Arc<dyn UserRepositoryTrait>) -> Self {
        UserService { user_repository }
    }
}

#[async_trait]
impl UserServiceTrait for UserService {
    fn get_users(&self) -> Result<Vec<User>> {
        self.user_repository.load_users()
    }

    fn get_user_by_email(&self, email: &str) -> Result<Option<User>> {
        self.user_repository.find_user_by_email(email)
    }

    async fn create_user(&self, new_user: NewUser) -> Result<User> {
        if new_user.name.trim().is_empty() {
            return Err(ValidationError::MissingField("name".to_string()).into());
        }
        if new_user.email.trim().is_empty() {
            return Err(ValidationError::MissingField("email".to_string()).into());
        }
        if self
            .user_repository
            .find_user_by_email(&new_user.email)?
            .is_some()
        {
            return Err(Error::Conflict("email is already registered".to_string()));
        }
        let user = User {
            id: new_user.id.unwrap_or_else(|| Uuid::new_v4().to_string()),
            name: new_user.name,
            email: new_user.email,
            password_hash: new_user.password_hash,
            role: new_user.role,
            created_at: Utc::now(),
        };
        self.user_repository.insert_user(user).await
    }

    async fn update_user(&self, user_id: String, update: UserUpdate) -> Result<User> {
        let existing = self.user_repository.find_user(&user_id)?;
        if let Some(other) = self.user_repository.find_user_by_email(&update.email)? {
            if other.id != existing.id {
                return Err(Error::Conflict("email is already registered".to_string()));
            }
        }
        let user = User {
            id: existing.id,
            name: update.name,
            email: update.email,
            password_hash: update.password_hash.unwrap_or(existing.password_hash),
            role: update.role,
            created_at: existing.created_at,
        };
        self.user_repository.update_user(user).await
    }

    async fn delete_user(&self, user_id: String) -> Result<usize> {
        if self.user_repository.count_users()? <= 1 {
            return Err(ValidationError::InvalidInput(
                "cannot delete the only remaining user".to_string(),
            )
            .into());
        }
        self.user_repository.delete_user(user_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::users::UserRole;
    use std::sync::RwLock;

    struct MockUserRepository {
        users: RwLock<Vec<User>>,
    }

    #[async_trait]
    impl UserRepositoryTrait for MockUserRepository {
        fn load_users(&self) -> Result<Vec<User>> {
            Ok(self.users.read().unwrap().clone())
        }

        fn find_user(&self, user_id: &str) -> Result<User> {
            self.users
                .read()
                .unwrap()
                .iter()
                .find(|u| u.id == user_id)
                .cloned()
                .ok_or_else(|| {
                    Error::Database(crate::errors::DatabaseError::NotFound(
                        "user not found".to_string(),
                    ))
                })
        }

        fn find_user_by_email(&self, email: &str) -> Result<Option<User>> {
            Ok(self
                .users
                .read()
                .unwrap()
                .iter()
                .find(|u| u.email == email)
                .cloned())
        }

        fn count_users(&self) -> Result<i64> {
            Ok(self.users.read().unwrap().len() as i64)
        }

        async fn insert_user(&self, user: User) -> Result<User> {
            self.users.write().unwrap().push(user.clone());
            Ok(user)
        }

        async fn update_user(&self, user: User) -> Result<User> {
            let mut users = self.users.write().unwrap();
            let slot = users
                .iter_mut()
                .find(|u| u.id == user.id)
                .expect("user exists");
            *slot = user.clone();
            Ok(user)
        }

        async fn delete_user(&self, user_id: String) -> Result<usize> {
            let mut users = self.users.write().unwrap();
            let before = users.len();
            users.retain(|u| u.id != user_id);
            Ok(before - users.len())
        }
    }

    fn service() -> UserService {
        UserService::new(Arc::new(MockUserRepository {
            users: RwLock::new(Vec::new()),
        }))
    }

    fn account(email: &str) -> NewUser {
        NewUser {
            id: None,
            name: "Maria".to_string(),
            email: email.to_string(),
            password_hash: "hash".to_string(),
            role: UserRole::Viewer,
        }
    }

    #[tokio::test]
    async fn duplicate_email_conflicts() {
        let svc = service();
        svc.create_user(account("maria@example.org")).await.unwrap();
        let result = svc.create_user(account("maria@example.org")).await;
        assert!(matches!(result, Err(Error::Conflict(_))));
    }

    #[tokio::test]
    async fn last_user_cannot_be_deleted() {
        let svc = service();
        let only = svc.create_user(account("maria@example.org")).await.unwrap();
        assert!(svc.delete_user(only.id.clone()).await.is_err());

        svc.create_user(account("joao@example.org")).await.unwrap();
        assert_eq!(svc.delete_user(only.id).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn update_keeps_hash_when_none_supplied() {
        let svc = service();
        let user = svc.create_user(account("maria@example.org")).await.unwrap();
        let updated = svc
            .update_user(
                user.id,
                UserUpdate {
                    name: "Maria Silva".to_string(),
                    email: "maria@example.org".to_string(),
                    role: UserRole::Admin,
                    password_hash: None,
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.password_hash, "hash");
        assert_eq!(updated.role, UserRole::Admin);
    }
}
