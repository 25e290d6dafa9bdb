//! Catalog item domain models.
//!
//! Catalog items are reusable material/service definitions referenced by
//! contract line items. The registry fields tie an item back to the public
//! procurement registry it was imported from.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Domain model representing a catalog item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogItem {
    pub id: String,
    pub description: String,
    #[serde(default)]
    pub category: Option<String>,
    pub unit: String,
    pub unit_price: Decimal,
    #[serde(default)]
    pub registry_catalog: Option<String>,
    #[serde(default)]
    pub registry_class: Option<String>,
    #[serde(default)]
    pub registry_subclass: Option<String>,
    #[serde(default)]
    pub specification: Option<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Input model for creating a new catalog item.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCatalogItem {
    pub id: Option<String>,
    pub description: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default)]
    pub unit_price: Option<Decimal>,
    #[serde(default)]
    pub registry_catalog: Option<String>,
    #[serde(default)]
    pub registry_class: Option<String>,
    #[serde(default)]
    pub registry_subclass: Option<String>,
    #[serde(default)]
    pub specification: Option<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Wholesale update of a catalog item.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogItemUpdate {
    pub description: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default)]
    pub unit_price: Option<Decimal>,
    #[serde(default)]
    pub registry_catalog: Option<String>,
    #[serde(default)]
    pub registry_class: Option<String>,
    #[serde(default)]
    pub registry_subclass: Option<String>,
    #[serde(default)]
    pub specification: Option<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub notes: Option<String>,
}
