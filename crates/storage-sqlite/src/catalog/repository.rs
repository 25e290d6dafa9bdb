use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::SqliteConnection;

use fiscus_core::catalog::{CatalogItem, CatalogItemRepositoryTrait};
use fiscus_core::Result;

use super::model::CatalogItemDB;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::catalog_items;

pub struct CatalogItemRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl CatalogItemRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        CatalogItemRepository { pool, writer }
    }
}

#[async_trait]
impl CatalogItemRepositoryTrait for CatalogItemRepository {
    fn load_catalog_items(&self) -> Result<Vec<CatalogItem>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = catalog_items::table
            .order(catalog_items::description.asc())
            .load::<CatalogItemDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(rows.into_iter().map(CatalogItem::from).collect())
    }

    fn find_catalog_item(&self, item_id: &str) -> Result<CatalogItem> {
        let mut conn = get_connection(&self.pool)?;
        let row = catalog_items::table
            .find(item_id)
            .first::<CatalogItemDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(CatalogItem::from(row))
    }

    async fn insert_catalog_item(&self, item: CatalogItem) -> Result<CatalogItem> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<CatalogItem> {
                let row: CatalogItemDB = item.into();
                let inserted = diesel::insert_into(catalog_items::table)
                    .values(&row)
                    .returning(CatalogItemDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(CatalogItem::from(inserted))
            })
            .await
    }

    async fn update_catalog_item(&self, item: CatalogItem) -> Result<CatalogItem> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<CatalogItem> {
                let row: CatalogItemDB = item.into();
                let updated = diesel::update(catalog_items::table.find(row.id.clone()))
                    .set(&row)
                    .returning(CatalogItemDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(CatalogItem::from(updated))
            })
            .await
    }

    async fn delete_catalog_item(&self, item_id: String) -> Result<usize> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                Ok(diesel::delete(catalog_items::table.find(item_id))
                    .execute(conn)
                    .map_err(StorageError::from)?)
            })
            .await
    }
}
