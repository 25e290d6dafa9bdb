use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use serde::Serialize;
use uuid::Uuid;

use crate::constants::ORG_ENTITY_MAX_BYTES;
use crate::errors::{Error, Result, ValidationError};

use super::entities_model::{NewOrgEntity, OrgEntity, OrgEntityUpdate};
use super::entities_traits::{OrgEntityRepositoryTrait, OrgEntityServiceTrait};

pub struct OrgEntityService {
    entity_repository: Arc<dyn OrgEntityRepositoryTrait>,
}

impl OrgEntityService {
    pub fn new(entity_repository: Arc<dyn OrgEntityRepositoryTrait>) -> Self {
        OrgEntityService { entity_repository }
    }

    fn validate_names(name: &str, full_name: &str) -> Result<()> {
        if name.trim().is_empty() {
            return Err(ValidationError::MissingField("name".to_string()).into());
        }
        if full_name.trim().is_empty() {
            return Err(ValidationError::MissingField("fullName".to_string()).into());
        }
        Ok(())
    }

    /// Reject profiles whose serialized form blows the embedded-image budget.
    fn check_payload_size<T: Serialize>(payload: &T) -> Result<()> {
        let size = serde_json::to_string(payload)?.len();
        if size > ORG_ENTITY_MAX_BYTES {
            return Err(Error::PayloadTooLarge(
                "embedded images are too large; reduce the image size and try again".to_string(),
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl OrgEntityServiceTrait for OrgEntityService {
    fn get_entities(&self) -> Result<Vec<OrgEntity>> {
        self.entity_repository.load_entities()
    }

    async fn create_entity(&self, new_entity: NewOrgEntity) -> Result<OrgEntity> {
        Self::validate_names(&new_entity.name, &new_entity.full_name)?;
        Self::check_payload_size(&new_entity)?;
        if self.entity_repository.count_entities()? > 0 {
            return Err(Error::Conflict(
                "an organization profile already exists".to_string(),
            ));
        }
        let entity = OrgEntity {
            id: new_entity.id.unwrap_or_else(|| Uuid::new_v4().to_string()),
            name: new_entity.name,
            full_name: new_entity.full_name,
            document_number: new_entity.document_number,
            address: new_entity.address,
            phone: new_entity.phone,
            email: new_entity.email,
            website: new_entity.website,
            logo_url: new_entity.logo_url,
            coat_of_arms_url: new_entity.coat_of_arms_url,
            created_at: Utc::now(),
        };
        self.entity_repository.insert_entity(entity).await
    }

    async fn update_entity(&self, entity_id: String, update: OrgEntityUpdate) -> Result<OrgEntity> {
        Self::validate_names(&update.name, &update.full_name)?;
        Self::check_payload_size(&update)?;
        let existing = self.entity_repository.find_entity(&entity_id)?;
        let entity = OrgEntity {
            id: existing.id,
            name: update.name,
            full_name: update.full_name,
            document_number: update.document_number,
            address: update.address,
            phone: update.phone,
            email: update.email,
            website: update.website,
            logo_url: update.logo_url,
            coat_of_arms_url: update.coat_of_arms_url,
            created_at: existing.created_at,
        };
        self.entity_repository.update_entity(entity).await
    }

    async fn delete_entity(&self, entity_id: String) -> Result<usize> {
        self.entity_repository.delete_entity(entity_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::RwLock;

    struct MockEntityRepository {
        entities: RwLock<Vec<OrgEntity>>,
    }

    #[async_trait]
    impl OrgEntityRepositoryTrait for MockEntityRepository {
        fn load_entities(&self) -> Result<Vec<OrgEntity>> {
            Ok(self.entities.read().unwrap().clone())
        }

        fn find_entity(&self, entity_id: &str) -> Result<OrgEntity> {
            self.entities
                .read()
                .unwrap()
                .iter()
                .find(|e| e.id == entity_id)
                .cloned()
                .ok_or_else(|| {
                    Error::Database(crate::errors::DatabaseError::NotFound(
                        "entity not found".to_string(),
                    ))
                })
        }

        fn count_entities(&self) -> Result<i64> {
            Ok(self.entities.read().unwrap().len() as i64)
        }

        async fn insert_entity(&self, entity: OrgEntity) -> Result<OrgEntity> {
            self.entities.write().unwrap().push(entity.clone());
            Ok(entity)
        }

        async fn update_entity(&self, entity: OrgEntity) -> Result<OrgEntity> {
            let mut entities = self.entities.write().unwrap();
            let slot = entities
                .iter_mut()
                .find(|e| e.id == entity.id)
                .expect("entity exists");
            *slot = entity.clone();
            Ok(entity)
        }

        async fn delete_entity(&self, entity_id: String) -> Result<usize> {
            let mut entities = self.entities.write().unwrap();
            let before = entities.len();
            entities.retain(|e| e.id != entity_id);
            Ok(before - entities.len())
        }
    }

    fn service() -> OrgEntityService {
        OrgEntityService::new(Arc::new(MockEntityRepository {
            entities: RwLock::new(Vec::new()),
        }))
    }

    fn profile(name: &str) -> NewOrgEntity {
        NewOrgEntity {
            id: None,
            name: name.to_string(),
            full_name: format!("{name} institute"),
            document_number: None,
            address: None,
            phone: None,
            email: None,
            website: None,
            logo_url: None,
            coat_of_arms_url: None,
        }
    }

    #[tokio::test]
    async fn second_profile_conflicts() {
        let svc = service();
        svc.create_entity(profile("city hall")).await.unwrap();
        let result = svc.create_entity(profile("another")).await;
        assert!(matches!(result, Err(Error::Conflict(_))));
    }

    #[tokio::test]
    async fn oversized_images_are_rejected() {
        let svc = service();
        let mut input = profile("city hall");
        input.logo_url = Some("x".repeat(ORG_ENTITY_MAX_BYTES + 1));
        let result = svc.create_entity(input).await;
        assert!(matches!(result, Err(Error::PayloadTooLarge(_))));
    }
}
