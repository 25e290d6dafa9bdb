//! Database model for users.

use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use fiscus_core::users::{User, UserRole};

use crate::utils::parse_datetime_utc;

#[derive(
    Queryable,
    Identifiable,
    Insertable,
    AsChangeset,
    Selectable,
    PartialEq,
    Serialize,
    Deserialize,
    Debug,
    Clone,
)]
#[diesel(table_name = crate::schema::users)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct UserDB {
    pub id: String,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: String,
    pub created_at: String,
}

fn role_to_str(role: UserRole) -> &'static str {
    match role {
        UserRole::Admin => "admin",
        UserRole::FinanceManager => "finance_manager",
        UserRole::Viewer => "viewer",
    }
}

fn role_from_str(value: &str) -> UserRole {
    match value {
        "admin" => UserRole::Admin,
        "finance_manager" => UserRole::FinanceManager,
        "viewer" => UserRole::Viewer,
        other => {
            log::error!("unknown user role '{other}', treating as viewer");
            UserRole::Viewer
        }
    }
}

impl From<UserDB> for User {
    fn from(db: UserDB) -> Self {
        Self {
            id: db.id,
            name: db.name,
            email: db.email,
            password_hash: db.password_hash,
            role: role_from_str(&db.role),
            created_at: parse_datetime_utc(&db.created_at, "created_at"),
        }
    }
}

impl From<User> for UserDB {
    fn from(domain: User) -> Self {
        Self {
            id: domain.id,
            name: domain.name,
            email: domain.email,
            password_hash: domain.password_hash,
            role: role_to_str(domain.role).to_string(),
            created_at: domain.created_at.to_rfc3339(),
        }
    }
}
