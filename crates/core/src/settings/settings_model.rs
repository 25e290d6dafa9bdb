//! Settings domain models.
//!
//! The settings document is a typed record with enumerated keys. Unknown
//! fields are rejected at the boundary instead of being silently stored.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The merged settings document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Budget constant the dashboard reports against.
    pub available_balance: Decimal,
    pub header_text: String,
    pub footer_text: String,
    pub logo_url: Option<String>,
    pub coat_of_arms_url: Option<String>,
    /// Reference to the organization profile used on exported documents.
    pub entity_id: Option<String>,
    pub theme: String,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            available_balance: Decimal::ZERO,
            header_text: String::new(),
            footer_text: String::new(),
            logo_url: None,
            coat_of_arms_url: None,
            entity_id: None,
            theme: "light".to_string(),
        }
    }
}

/// Partial settings merge; only present fields are written.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SettingsUpdate {
    pub available_balance: Option<Decimal>,
    pub header_text: Option<String>,
    pub footer_text: Option<String>,
    pub logo_url: Option<String>,
    pub coat_of_arms_url: Option<String>,
    pub entity_id: Option<String>,
    pub theme: Option<String>,
}
