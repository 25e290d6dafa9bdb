//! Wire models for the procurement-catalog lookup.

use serde::{Deserialize, Serialize};

/// Which registry a lookup targets: materials (CATMAT) or services (CATSERV).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CatalogKind {
    Material,
    Service,
}

impl Default for CatalogKind {
    fn default() -> Self {
        CatalogKind::Material
    }
}

impl CatalogKind {
    /// Official registry label shown to users.
    pub fn registry_label(&self) -> &'static str {
        match self {
            CatalogKind::Material => "CATMAT",
            CatalogKind::Service => "CATSERV",
        }
    }
}

/// A normalized registry row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistryItem {
    pub code: String,
    pub description: String,
    pub unit: String,
    pub class: String,
    pub subclass: String,
    /// Registry label: CATMAT or CATSERV.
    pub catalog: String,
}

/// Where search rows came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchSource {
    Remote,
    Local,
}

/// Result of a registry search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrySearchResponse {
    pub items: Vec<RegistryItem>,
    pub total: usize,
    pub source: SearchSource,
}

/// One entry of the registry's catalog list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistryCatalog {
    pub id: i64,
    pub name: String,
    pub description: String,
}
