use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::SqliteConnection;

use fiscus_core::entities::{OrgEntity, OrgEntityRepositoryTrait};
use fiscus_core::Result;

use super::model::OrgEntityDB;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::org_entities;

pub struct OrgEntityRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl OrgEntityRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        OrgEntityRepository { pool, writer }
    }
}

#[async_trait]
impl OrgEntityRepositoryTrait for OrgEntityRepository {
    fn load_entities(&self) -> Result<Vec<OrgEntity>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = org_entities::table
            .order(org_entities::created_at.asc())
            .load::<OrgEntityDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(rows.into_iter().map(OrgEntity::from).collect())
    }

    fn find_entity(&self, entity_id: &str) -> Result<OrgEntity> {
        let mut conn = get_connection(&self.pool)?;
        let row = org_entities::table
            .find(entity_id)
            .first::<OrgEntityDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(OrgEntity::from(row))
    }

    fn count_entities(&self) -> Result<i64> {
        let mut conn = get_connection(&self.pool)?;
        let count = org_entities::table
            .count()
            .get_result::<i64>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(count)
    }

    async fn insert_entity(&self, entity: OrgEntity) -> Result<OrgEntity> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<OrgEntity> {
                let row: OrgEntityDB = entity.into();
                let inserted = diesel::insert_into(org_entities::table)
                    .values(&row)
                    .returning(OrgEntityDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(OrgEntity::from(inserted))
            })
            .await
    }

    async fn update_entity(&self, entity: OrgEntity) -> Result<OrgEntity> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<OrgEntity> {
                let row: OrgEntityDB = entity.into();
                let updated = diesel::update(org_entities::table.find(row.id.clone()))
                    .set(&row)
                    .returning(OrgEntityDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(OrgEntity::from(updated))
            })
            .await
    }

    async fn delete_entity(&self, entity_id: String) -> Result<usize> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                Ok(diesel::delete(org_entities::table.find(entity_id))
                    .execute(conn)
                    .map_err(StorageError::from)?)
            })
            .await
    }
}
