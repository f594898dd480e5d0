use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;

use tokio::sync::RwLock;

use crate::domain::errors::DomainError;
use crate::domain::key::{KeyKind, ResourceKey};
use crate::domain::resource::Resource;
use crate::infrastructure::ResourceStore;

/// In-memory store for one resource type. Entities live in a `BTreeMap`, so
/// iteration order is key order and stable across calls.
pub struct InMemoryStore<E: Resource> {
    entities: RwLock<BTreeMap<E::Key, E>>,
    sequence: AtomicI64,
}

impl<E: Resource> InMemoryStore<E> {
    pub fn new() -> Self {
        Self {
            entities: RwLock::new(BTreeMap::new()),
            sequence: AtomicI64::new(0),
        }
    }

    fn next_key(&self) -> Result<E::Key, DomainError> {
        match E::Key::KIND {
            KeyKind::Generated => {
                let seq = self.sequence.fetch_add(1, Ordering::SeqCst) + 1;
                E::Key::from_sequence(seq).ok_or_else(|| {
                    DomainError::internal("key type does not support store-assigned values")
                })
            }
            // Natural keys come from the field set; reaching here means the
            // business field was missing.
            KeyKind::Natural => Err(DomainError::validation(format!(
                "field '{}' is required",
                E::KEY_PARAM
            ))),
        }
    }
}

impl<E: Resource> Default for InMemoryStore<E> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<E: Resource> ResourceStore<E> for InMemoryStore<E> {
    async fn list(&self) -> Result<Vec<E>, DomainError> {
        Ok(self.entities.read().await.values().cloned().collect())
    }

    async fn get(&self, key: &E::Key) -> Result<Option<E>, DomainError> {
        Ok(self.entities.read().await.get(key).cloned())
    }

    async fn create(&self, fields: E::Fields) -> Result<E, DomainError> {
        let key = match E::natural_key(&fields) {
            Some(key) => key,
            None => self.next_key()?,
        };

        let entity = E::assemble(key, fields);
        self.entities
            .write()
            .await
            .insert(entity.key(), entity.clone());
        Ok(entity)
    }

    async fn save(&self, entity: E) -> Result<(), DomainError> {
        self.entities.write().await.insert(entity.key(), entity);
        Ok(())
    }

    async fn delete(&self, key: &E::Key) -> Result<bool, DomainError> {
        Ok(self.entities.write().await.remove(key).is_some())
    }
}
