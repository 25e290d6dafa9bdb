//! Organization profile domain models.
//!
//! The profile carries the institution's identity and branding used on
//! exported documents. Logo and coat-of-arms images are embedded as data
//! URLs, which is why the serialized payload is size-capped.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Domain model representing the organization profile. At most one exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrgEntity {
    pub id: String,
    pub name: String,
    pub full_name: String,
    #[serde(default)]
    pub document_number: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub logo_url: Option<String>,
    #[serde(default)]
    pub coat_of_arms_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Input model for creating the organization profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOrgEntity {
    pub id: Option<String>,
    pub name: String,
    pub full_name: String,
    #[serde(default)]
    pub document_number: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub logo_url: Option<String>,
    #[serde(default)]
    pub coat_of_arms_url: Option<String>,
}

/// Wholesale update of the organization profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrgEntityUpdate {
    pub name: String,
    pub full_name: String,
    #[serde(default)]
    pub document_number: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub logo_url: Option<String>,
    #[serde(default)]
    pub coat_of_arms_url: Option<String>,
}
