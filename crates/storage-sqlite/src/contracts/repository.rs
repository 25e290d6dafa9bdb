use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::SqliteConnection;

use fiscus_core::contracts::{Contract, ContractItem, ContractRepositoryTrait};
use fiscus_core::errors::{DatabaseError, Error, Result};

use super::model::{serialize_items, ContractDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::contracts;

pub struct ContractRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl ContractRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        ContractRepository { pool, writer }
    }
}

/// Swap one contract's item column; returns the refreshed row.
fn replace_items_on(
    conn: &mut SqliteConnection,
    contract_id: &str,
    items: &[ContractItem],
) -> Result<ContractDB> {
    let affected = diesel::update(contracts::table.find(contract_id))
        .set(contracts::items.eq(serialize_items(items)))
        .execute(conn)
        .map_err(StorageError::from)?;
    if affected == 0 {
        return Err(Error::Database(DatabaseError::NotFound(format!(
            "contract '{contract_id}' not found"
        ))));
    }
    let row = contracts::table
        .find(contract_id)
        .first::<ContractDB>(conn)
        .map_err(StorageError::from)?;
    Ok(row)
}

#[async_trait]
impl ContractRepositoryTrait for ContractRepository {
    fn load_contracts(&self) -> Result<Vec<Contract>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = contracts::table
            .order(contracts::created_at.desc())
            .load::<ContractDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(rows.into_iter().map(Contract::from).collect())
    }

    fn find_contract(&self, contract_id: &str) -> Result<Contract> {
        let mut conn = get_connection(&self.pool)?;
        let row = contracts::table
            .find(contract_id)
            .first::<ContractDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(Contract::from(row))
    }

    async fn insert_contract(&self, contract: Contract) -> Result<Contract> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Contract> {
                let row: ContractDB = contract.into();
                let inserted = diesel::insert_into(contracts::table)
                    .values(&row)
                    .returning(ContractDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(Contract::from(inserted))
            })
            .await
    }

    async fn update_contract(&self, contract: Contract) -> Result<Contract> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Contract> {
                let row: ContractDB = contract.into();
                let updated = diesel::update(contracts::table.find(row.id.clone()))
                    .set(&row)
                    .returning(ContractDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(Contract::from(updated))
            })
            .await
    }

    async fn delete_contract(&self, contract_id: String) -> Result<usize> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                Ok(diesel::delete(contracts::table.find(contract_id))
                    .execute(conn)
                    .map_err(StorageError::from)?)
            })
            .await
    }

    async fn replace_items(
        &self,
        contract_id: String,
        items: Vec<ContractItem>,
    ) -> Result<Contract> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Contract> {
                let row = replace_items_on(conn, &contract_id, &items)?;
                Ok(Contract::from(row))
            })
            .await
    }

    async fn replace_items_batch(
        &self,
        batches: Vec<(String, Vec<ContractItem>)>,
    ) -> Result<usize> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                let mut written = 0;
                for (contract_id, items) in &batches {
                    replace_items_on(conn, contract_id, items)?;
                    written += 1;
                }
                Ok(written)
            })
            .await
    }
}
