use async_trait::async_trait;
use diesel::prelude::*;
use diesel::SqliteConnection;
use std::sync::Arc;

use super::model::AppSettingDB;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::app_settings::dsl::*;
use crate::utils::parse_decimal;
use fiscus_core::errors::{DatabaseError, Error, Result};
use fiscus_core::settings::{Settings, SettingsRepositoryTrait, SettingsUpdate};

pub struct SettingsRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl SettingsRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        SettingsRepository { pool, writer }
    }
}

fn replace_setting(
    conn: &mut SqliteConnection,
    key: &str,
    value: String,
) -> std::result::Result<(), StorageError> {
    diesel::replace_into(app_settings)
        .values(&AppSettingDB {
            setting_key: key.to_string(),
            setting_value: value,
        })
        .execute(conn)?;
    Ok(())
}

#[async_trait]
impl SettingsRepositoryTrait for SettingsRepository {
    fn get_settings(&self) -> Result<Settings> {
        let mut conn = get_connection(&self.pool)?;
        let all_settings: Vec<(String, String)> = app_settings
            .select((setting_key, setting_value))
            .load::<(String, String)>(&mut conn)
            .map_err(StorageError::from)?;

        let mut settings = Settings::default();

        for (key, value) in all_settings {
            match key.as_str() {
                "available_balance" => {
                    settings.available_balance = parse_decimal(&value, "available_balance");
                }
                "header_text" => settings.header_text = value,
                "footer_text" => settings.footer_text = value,
                "logo_url" => settings.logo_url = Some(value),
                "coat_of_arms_url" => settings.coat_of_arms_url = Some(value),
                "entity_id" => settings.entity_id = Some(value),
                "theme" => settings.theme = value,
                _ => {} // Ignore unknown settings
            }
        }

        Ok(settings)
    }

    async fn update_settings(&self, update: &SettingsUpdate) -> Result<()> {
        let update = update.clone();
        self.writer
            .exec(move |conn| {
                if let Some(available_balance) = update.available_balance {
                    replace_setting(conn, "available_balance", available_balance.to_string())?;
                }
                if let Some(ref header_text) = update.header_text {
                    replace_setting(conn, "header_text", header_text.clone())?;
                }
                if let Some(ref footer_text) = update.footer_text {
                    replace_setting(conn, "footer_text", footer_text.clone())?;
                }
                if let Some(ref logo_url) = update.logo_url {
                    replace_setting(conn, "logo_url", logo_url.clone())?;
                }
                if let Some(ref coat_of_arms_url) = update.coat_of_arms_url {
                    replace_setting(conn, "coat_of_arms_url", coat_of_arms_url.clone())?;
                }
                if let Some(ref entity_id) = update.entity_id {
                    replace_setting(conn, "entity_id", entity_id.clone())?;
                }
                if let Some(ref theme) = update.theme {
                    replace_setting(conn, "theme", theme.clone())?;
                }
                Ok(())
            })
            .await
    }

    fn get_setting(&self, key: &str) -> Result<String> {
        let mut conn = get_connection(&self.pool)?;
        let value = app_settings
            .filter(setting_key.eq(key))
            .select(setting_value)
            .first::<String>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;
        value.ok_or_else(|| Error::Database(DatabaseError::NotFound(format!("setting '{key}'"))))
    }

    async fn update_setting(&self, key: &str, value: &str) -> Result<()> {
        let key = key.to_string();
        let value = value.to_string();
        self.writer
            .exec(move |conn| {
                replace_setting(conn, &key, value)?;
                Ok(())
            })
            .await
    }
}
