//! Database model for creditors.

use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use fiscus_core::creditors::Creditor;

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
#[diesel(table_name = crate::schema::creditors)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct CreditorDB {
    pub id: String,
    pub name: String,
    pub document_number: String,
    pub contact: String,
    pub email: String,
    pub postal_code: String,
    pub street: String,
    pub neighborhood: String,
    pub city: String,
    pub state: String,
}

impl From<CreditorDB> for Creditor {
    fn from(db: CreditorDB) -> Self {
        Self {
            id: db.id,
            name: db.name,
            document_number: db.document_number,
            contact: db.contact,
            email: db.email,
            postal_code: db.postal_code,
            street: db.street,
            neighborhood: db.neighborhood,
            city: db.city,
            state: db.state,
        }
    }
}

impl From<Creditor> for CreditorDB {
    fn from(domain: Creditor) -> Self {
        Self {
            id: domain.id,
            name: domain.name,
            document_number: domain.document_number,
            contact: domain.contact,
            email: domain.email,
            postal_code: domain.postal_code,
            street: domain.street,
            neighborhood: domain.neighborhood,
            city: domain.city,
            state: domain.state,
        }
    }
}
