//! Database model for the organization profile.

use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use fiscus_core::entities::OrgEntity;

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
#[diesel(table_name = crate::schema::org_entities)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[diesel(treat_none_as_null = true)]
#[serde(rename_all = "camelCase")]
pub struct OrgEntityDB {
    pub id: String,
    pub name: String,
    pub full_name: String,
    pub document_number: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub website: Option<String>,
    pub logo_url: Option<String>,
    pub coat_of_arms_url: Option<String>,
    pub created_at: String,
}

impl From<OrgEntityDB> for OrgEntity {
    fn from(db: OrgEntityDB) -> Self {
        Self {
            id: db.id,
            name: db.name,
            full_name: db.full_name,
            document_number: db.document_number,
            address: db.address,
            phone: db.phone,
            email: db.email,
            website: db.website,
            logo_url: db.logo_url,
            coat_of_arms_url: db.coat_of_arms_url,
            created_at: parse_datetime_utc(&db.created_at, "created_at"),
        }
    }
}

impl From<OrgEntity> for OrgEntityDB {
    fn from(domain: OrgEntity) -> Self {
        Self {
            id: domain.id,
            name: domain.name,
            full_name: domain.full_name,
            document_number: domain.document_number,
            address: domain.address,
            phone: domain.phone,
            email: domain.email,
            website: domain.website,
            logo_url: domain.logo_url,
            coat_of_arms_url: domain.coat_of_arms_url,
            created_at: domain.created_at.to_rfc3339(),
        }
    }
}
