use async_trait::async_trait;

use crate::domain::errors::DomainError;
use crate::domain::resource::Resource;

pub mod in_memory_store;

/// Persistence seam for one resource type. The service never assumes anything
/// about the backing engine beyond this contract; concurrency discipline is
/// the implementation's own business.
#[async_trait]
pub trait ResourceStore<E: Resource>: Send + Sync {
    /// All entities, in the store's own iteration order.
    async fn list(&self) -> Result<Vec<E>, DomainError>;

    async fn get(&self, key: &E::Key) -> Result<Option<E>, DomainError>;

    /// Persist a new entity. Generated keys are assigned here; a natural key
    /// that collides with an existing entity overwrites it.
    async fn create(&self, fields: E::Fields) -> Result<E, DomainError>;

    /// Overwrite the stored value at `entity.key()`.
    async fn save(&self, entity: E) -> Result<(), DomainError>;

    /// Remove the key. `false` when the key was absent.
    async fn delete(&self, key: &E::Key) -> Result<bool, DomainError>;
}
