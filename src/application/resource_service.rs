use std::sync::Arc;

use serde::Serialize;

use crate::application::authorization::{Role, RoleSet};
use crate::domain::errors::DomainError;
use crate::domain::resource::Resource;
use crate::infrastructure::ResourceStore;

/// Confirmation payload for delete, e.g. `{"message": "Book with id 7 deleted"}`.
#[derive(Debug, Clone, Serialize)]
pub struct GenericMessage {
    pub message: String,
}

/// The one CRUD implementation shared by every resource type. Each operation
/// checks the caller's roles before touching the store, so a denied call has
/// no observable effect on persisted state. get/update/delete confirm
/// existence before acting; the miss is reported with the uniform not-found
/// error and no write is attempted.
#[derive(Clone)]
pub struct ResourceService<E: Resource> {
    store: Arc<dyn ResourceStore<E>>,
}

impl<E: Resource> ResourceService<E> {
    pub fn new(store: Arc<dyn ResourceStore<E>>) -> Self {
        Self { store }
    }

    pub async fn list(&self, caller: &RoleSet) -> Result<Vec<E>, DomainError> {
        caller.require(Role::Read)?;
        self.store.list().await
    }

    pub async fn get(&self, caller: &RoleSet, key: E::Key) -> Result<E, DomainError> {
        caller.require(Role::Read)?;
        self.fetch(&key).await
    }

    pub async fn create(&self, caller: &RoleSet, fields: E::Fields) -> Result<E, DomainError> {
        caller.require(Role::Write)?;
        self.store.create(fields).await
    }

    pub async fn update(
        &self,
        caller: &RoleSet,
        key: E::Key,
        fields: E::Fields,
    ) -> Result<E, DomainError> {
        caller.require(Role::Write)?;
        let mut entity = self.fetch(&key).await?;
        entity.replace_fields(fields);
        self.store.save(entity.clone()).await?;
        Ok(entity)
    }

    pub async fn delete(
        &self,
        caller: &RoleSet,
        key: E::Key,
    ) -> Result<GenericMessage, DomainError> {
        caller.require(Role::Write)?;
        let entity = self.fetch(&key).await?;
        self.store.delete(&key).await?;
        Ok(GenericMessage {
            message: format!("{} with id {} deleted", E::TYPE_NAME, entity.key()),
        })
    }

    async fn fetch(&self, key: &E::Key) -> Result<E, DomainError> {
        self.store
            .get(key)
            .await?
            .ok_or_else(|| DomainError::not_found(E::TYPE_NAME, key))
    }
}
