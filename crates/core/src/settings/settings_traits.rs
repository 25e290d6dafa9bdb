use async_trait::async_trait;

use crate::errors::Result;

use super::settings_model::{Settings, SettingsUpdate};

/// Trait for settings repository operations.
#[async_trait]
pub trait SettingsRepositoryTrait: Send + Sync {
    fn get_settings(&self) -> Result<Settings>;
    async fn update_settings(&self, update: &SettingsUpdate) -> Result<()>;
    fn get_setting(&self, setting_key: &str) -> Result<String>;
    async fn update_setting(&self, setting_key: &str, setting_value: &str) -> Result<()>;
}
