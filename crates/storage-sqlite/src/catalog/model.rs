//! Database model for catalog items.

use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use fiscus_core::catalog::CatalogItem;

use crate::utils::parse_decimal;

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
#[diesel(table_name = crate::schema::catalog_items)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[diesel(treat_none_as_null = true)]
#[serde(rename_all = "camelCase")]
pub struct CatalogItemDB {
    pub id: String,
    pub description: String,
    pub category: Option<String>,
    pub unit: String,
    pub unit_price: String,
    pub registry_catalog: Option<String>,
    pub registry_class: Option<String>,
    pub registry_subclass: Option<String>,
    pub specification: Option<String>,
    /// JSON array of keyword strings.
    pub keywords: String,
    pub notes: Option<String>,
}

impl From<CatalogItemDB> for CatalogItem {
    fn from(db: CatalogItemDB) -> Self {
        let keywords = serde_json::from_str(&db.keywords).unwrap_or_else(|e| {
            log::error!("failed to parse keywords for catalog item '{}': {e}", db.id);
            Vec::new()
        });
        Self {
            id: db.id,
            description: db.description,
            category: db.category,
            unit: db.unit,
            unit_price: parse_decimal(&db.unit_price, "unit_price"),
            registry_catalog: db.registry_catalog,
            registry_class: db.registry_class,
            registry_subclass: db.registry_subclass,
            specification: db.specification,
            keywords,
            notes: db.notes,
        }
    }
}

impl From<CatalogItem> for CatalogItemDB {
    fn from(domain: CatalogItem) -> Self {
        Self {
            id: domain.id,
            description: domain.description,
            category: domain.category,
            unit: domain.unit,
            unit_price: domain.unit_price.to_string(),
            registry_catalog: domain.registry_catalog,
            registry_class: domain.registry_class,
            registry_subclass: domain.registry_subclass,
            specification: domain.specification,
            keywords: serde_json::to_string(&domain.keywords).unwrap_or_else(|_| "[]".to_string()),
            notes: domain.notes,
        }
    }
}
