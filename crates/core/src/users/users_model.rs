//! User domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Access level of a user account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Admin,
    FinanceManager,
    Viewer,
}

impl Default for UserRole {
    fn default() -> Self {
        UserRole::Viewer
    }
}

/// Domain model representing a user account.
///
/// The password hash never leaves the service boundary; it is skipped on
/// serialization so handlers can return the model directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing, default)]
    pub password_hash: String,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
}

/// Input model for creating a user. The password arrives already hashed;
/// hashing lives with the HTTP layer's credential handling.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub id: Option<String>,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: UserRole,
}

/// Update of a user account; the hash is replaced only when present.
#[derive(Debug, Clone)]
pub struct UserUpdate {
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub password_hash: Option<String>,
}
