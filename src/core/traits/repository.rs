use async_trait::async_trait;

use crate::core::traits::Entity;
use crate::core::Result;

/// Base repository trait for CRUD operations
/// All storage backends implement this trait so controllers never see the store
#[async_trait]
pub trait Repository<T: Entity>: Send + Sync {
    /// List every entity in insertion order
    async fn get_all(&self) -> Result<Vec<T>>;

    /// Find entity by ID, `None` when absent
    async fn get_by_id(&self, id: i32) -> Result<Option<T>>;

    /// Insert a new entity; the store assigns the key and the stored entity is returned
    async fn create(&self, entity: T) -> Result<T>;

    /// Replace every field of the row matching `entity.id()`
    async fn update(&self, entity: T) -> Result<()>;

    /// Remove the row matching `entity.id()`
    async fn delete(&self, entity: T) -> Result<()>;
}
