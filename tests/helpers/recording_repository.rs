// Recording Repository
//
// Test double for `Repository<Product>`: delegates storage to the crate's
// `InMemoryRepository` and keeps a log of every call.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use product_catalog::core::traits::Repository;
use product_catalog::core::{AppError, InMemoryRepository, Result};
use product_catalog::products::{Product, ProductStore};

use super::test_data::seed_products;

/// One repository invocation
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    GetAll,
    GetById(i32),
    Create(Product),
    Update(Product),
    Delete(Product),
}

pub struct RecordingRepository {
    inner: InMemoryRepository<Product>,
    calls: Mutex<Vec<Call>>,
}

impl RecordingRepository {
    pub fn empty() -> Arc<Self> {
        Arc::new(Self {
            inner: InMemoryRepository::new(),
            calls: Mutex::new(Vec::new()),
        })
    }

    /// Store holding Kalem (id 1) and Defter (id 2)
    pub fn seeded() -> Arc<Self> {
        Arc::new(Self {
            inner: InMemoryRepository::with_rows(seed_products()),
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn created(&self) -> Vec<Product> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                Call::Create(p) => Some(p),
                _ => None,
            })
            .collect()
    }

    pub fn updated(&self) -> Vec<Product> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                Call::Update(p) => Some(p),
                _ => None,
            })
            .collect()
    }

    pub fn deleted(&self) -> Vec<Product> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                Call::Delete(p) => Some(p),
                _ => None,
            })
            .collect()
    }

    /// True when no call other than reads reached the store
    pub fn no_writes(&self) -> bool {
        self.created().is_empty() && self.updated().is_empty() && self.deleted().is_empty()
    }

    pub fn store(self: &Arc<Self>) -> ProductStore {
        self.clone()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl Repository<Product> for RecordingRepository {
    async fn get_all(&self) -> Result<Vec<Product>> {
        self.record(Call::GetAll);
        self.inner.get_all().await
    }

    async fn get_by_id(&self, id: i32) -> Result<Option<Product>> {
        self.record(Call::GetById(id));
        self.inner.get_by_id(id).await
    }

    async fn create(&self, entity: Product) -> Result<Product> {
        self.record(Call::Create(entity.clone()));
        self.inner.create(entity).await
    }

    async fn update(&self, entity: Product) -> Result<()> {
        self.record(Call::Update(entity.clone()));
        self.inner.update(entity).await
    }

    async fn delete(&self, entity: Product) -> Result<()> {
        self.record(Call::Delete(entity.clone()));
        self.inner.delete(entity).await
    }
}

/// Repository whose every call fails like an unreachable database
pub struct FailingRepository;

impl FailingRepository {
    pub fn store() -> ProductStore {
        Arc::new(FailingRepository)
    }
}

#[async_trait]
impl Repository<Product> for FailingRepository {
    async fn get_all(&self) -> Result<Vec<Product>> {
        Err(AppError::Database(sqlx::Error::PoolTimedOut))
    }

    async fn get_by_id(&self, _id: i32) -> Result<Option<Product>> {
        Err(AppError::Database(sqlx::Error::PoolTimedOut))
    }

    async fn create(&self, _entity: Product) -> Result<Product> {
        Err(AppError::Database(sqlx::Error::PoolTimedOut))
    }

    async fn update(&self, _entity: Product) -> Result<()> {
        Err(AppError::Database(sqlx::Error::PoolTimedOut))
    }

    async fn delete(&self, _entity: Product) -> Result<()> {
        Err(AppError::Database(sqlx::Error::PoolTimedOut))
    }
}
