use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::SqliteConnection;

use fiscus_core::creditors::{Creditor, CreditorRepositoryTrait};
use fiscus_core::Result;

use super::model::CreditorDB;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::creditors;

pub struct CreditorRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl CreditorRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        CreditorRepository { pool, writer }
    }
}

#[async_trait]
impl CreditorRepositoryTrait for CreditorRepository {
    fn load_creditors(&self) -> Result<Vec<Creditor>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = creditors::table
            .order(creditors::name.asc())
            .load::<CreditorDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(rows.into_iter().map(Creditor::from).collect())
    }

    fn find_creditor(&self, creditor_id: &str) -> Result<Creditor> {
        let mut conn = get_connection(&self.pool)?;
        let row = creditors::table
            .find(creditor_id)
            .first::<CreditorDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(Creditor::from(row))
    }

    async fn insert_creditor(&self, creditor: Creditor) -> Result<Creditor> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Creditor> {
                let row: CreditorDB = creditor.into();
                let inserted = diesel::insert_into(creditors::table)
                    .values(&row)
                    .returning(CreditorDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(Creditor::from(inserted))
            })
            .await
    }

    async fn update_creditor(&self, creditor: Creditor) -> Result<Creditor> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Creditor> {
                let row: CreditorDB = creditor.into();
                let updated = diesel::update(creditors::table.find(row.id.clone()))
                    .set(&row)
                    .returning(CreditorDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(Creditor::from(updated))
            })
            .await
    }

    async fn delete_creditor(&self, creditor_id: String) -> Result<usize> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                Ok(diesel::delete(creditors::table.find(creditor_id))
                    .execute(conn)
                    .map_err(StorageError::from)?)
            })
            .await
    }
}
