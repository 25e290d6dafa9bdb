use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::errors::{Result, ValidationError};

use super::creditors_model::{Creditor, CreditorUpdate, NewCreditor};
use super::creditors_traits::{CreditorRepositoryTrait, CreditorServiceTrait};

pub struct CreditorService {
    creditor_repository: Arc<dyn CreditorRepositoryTrait>,
}

impl CreditorService {
    pub fn new(creditor_repository: Arc<dyn CreditorRepositoryTrait>) -> Self {
        CreditorService {
            creditor_repository,
        }
    }
}

#[async_trait]
impl CreditorServiceTrait for CreditorService {
    fn get_creditors(&self) -> Result<Vec<Creditor>> {
        self.creditor_repository.load_creditors()
    }

    async fn create_creditor(&self, new_creditor: NewCreditor) -> Result<Creditor> {
        if new_creditor.name.trim().is_empty() {
            return Err(ValidationError::MissingField("name".to_string()).into());
        }
        let creditor = Creditor {
            id: new_creditor.id.unwrap_or_else(|| Uuid::new_v4().to_string()),
            name: new_creditor.name,
            document_number: new_creditor.document_number,
            contact: new_creditor.contact,
            email: new_creditor.email,
            postal_code: new_creditor.postal_code,
            street: new_creditor.street,
            neighborhood: new_creditor.neighborhood,
            city: new_creditor.city,
            state: new_creditor.state,
        };
        self.creditor_repository.insert_creditor(creditor).await
    }

    async fn update_creditor(
        &self,
        creditor_id: String,
        update: CreditorUpdate,
    ) -> Result<Creditor> {
        if update.name.trim().is_empty() {
            return Err(ValidationError::MissingField("name".to_string()).into());
        }
        let existing = self.creditor_repository.find_creditor(&creditor_id)?;
        let creditor = Creditor {
            id: existing.id,
            name: update.name,
            document_number: update.document_number,
            contact: update.contact,
            email: update.email,
            postal_code: update.postal_code,
            street: update.street,
            neighborhood: update.neighborhood,
            city: update.city,
            state: update.state,
        };
        self.creditor_repository.update_creditor(creditor).await
    }

    async fn delete_creditor(&self, creditor_id: String) -> Result<usize> {
        self.creditor_repository.delete_creditor(creditor_id).await
    }
}
