//! Process-local repository for any [`Entity`].
//!
//! Backs the `memory` storage backend and serves as the substitutable test
//! double for controllers. Rows keep insertion order and keys come from a
//! monotonically increasing counter, like an AUTO_INCREMENT column.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::core::traits::{Entity, Repository};
use crate::core::Result;

struct Table<T> {
    rows: Vec<T>,
    next_id: i32,
}

pub struct InMemoryRepository<T: Entity> {
    table: RwLock<Table<T>>,
}

impl<T: Entity> InMemoryRepository<T> {
    pub fn new() -> Self {
        Self::with_rows(Vec::new())
    }

    /// Seed the table with rows whose keys are already set
    pub fn with_rows(rows: Vec<T>) -> Self {
        let next_id = rows.iter().map(Entity::id).max().unwrap_or(0) + 1;

        Self {
            table: RwLock::new(Table { rows, next_id }),
        }
    }

    /// Number of stored rows
    pub async fn len(&self) -> usize {
        self.table.read().await.rows.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl<T: Entity> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: Entity> Repository<T> for InMemoryRepository<T> {
    async fn get_all(&self) -> Result<Vec<T>> {
        Ok(self.table.read().await.rows.clone())
    }

    async fn get_by_id(&self, id: i32) -> Result<Option<T>> {
        let table = self.table.read().await;
        Ok(table.rows.iter().find(|row| row.id() == id).cloned())
    }

    async fn create(&self, mut entity: T) -> Result<T> {
        let mut table = self.table.write().await;

        entity.set_id(table.next_id);
        table.next_id += 1;
        table.rows.push(entity.clone());

        tracing::debug!(id = entity.id(), "Inserted in-memory row");
        Ok(entity)
    }

    async fn update(&self, entity: T) -> Result<()> {
        let mut table = self.table.write().await;

        match table.rows.iter_mut().find(|row| row.id() == entity.id()) {
            Some(row) => *row = entity,
            None => tracing::debug!(id = entity.id(), "Update matched no in-memory row"),
        }

        Ok(())
    }

    async fn delete(&self, entity: T) -> Result<()> {
        let mut table = self.table.write().await;
        table.rows.retain(|row| row.id() != entity.id());
        Ok(())
    }
}
