//! In-memory entity stores over the bundled fixtures
//!
//! Every store keeps its collection behind a lock, hands out copies, and
//! awaits the configured [`Latency`] before touching data.

pub mod blog;
pub mod catalog;
pub mod error;
pub mod inquiry;
pub mod latency;

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use tracing::{debug, info};

use crate::model::{Entity, Id, Identified, Product};

pub use blog::BlogStore;
pub use catalog::Catalog;
pub use error::{StoreError, StoreResult};
pub use inquiry::{InquiryInbox, InquiryStore};
pub use latency::Latency;

/// CRUD access to one entity collection
#[async_trait]
pub trait Repository<T: Entity>: Send + Sync {
    /// Copy of the full collection in insertion order
    async fn get_all(&self) -> StoreResult<Vec<T>>;

    async fn get_by_id(&self, id: Id) -> StoreResult<T>;

    /// Append `record` under a freshly assigned identifier
    async fn create(&self, record: T) -> StoreResult<T>;

    /// Shallow-merge `patch` into the stored record
    async fn update(&self, id: Id, patch: T::Patch) -> StoreResult<T>;

    async fn delete(&self, id: Id) -> StoreResult<T>;
}

/// Identifier for a new record: one past the largest in use, `1` when empty
pub fn next_id<T: Identified>(records: &[T]) -> StoreResult<Id> {
    match records.iter().map(Identified::id).max() {
        None => Ok(Id::new(1)),
        Some(max) => max
            .checked_next()
            .ok_or(StoreError::IdsExhausted(T::KIND)),
    }
}

/// First record carrying `id`
pub fn find_by_id<T: Identified + Clone>(records: &[T], id: Id) -> StoreResult<T> {
    records
        .iter()
        .find(|record| record.id() == id)
        .cloned()
        .ok_or_else(|| {
            debug!("{} {} not found", T::KIND, id);
            StoreError::not_found(T::KIND, id)
        })
}

/// Fixture-backed store for products, capabilities and certifications
pub struct FixtureStore<T> {
    records: RwLock<Vec<T>>,
    latency: Latency,
}

impl<T: Entity> FixtureStore<T> {
    pub fn new(records: Vec<T>, latency: Latency) -> Self {
        Self {
            records: RwLock::new(records),
            latency,
        }
    }

    pub fn len(&self) -> usize {
        self.records.read().map(|data| data.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn read(&self) -> StoreResult<RwLockReadGuard<'_, Vec<T>>> {
        self.records.read().map_err(|_| StoreError::poisoned())
    }

    fn write(&self) -> StoreResult<RwLockWriteGuard<'_, Vec<T>>> {
        self.records.write().map_err(|_| StoreError::poisoned())
    }

    fn position(data: &[T], id: Id) -> StoreResult<usize> {
        data.iter()
            .position(|record| record.id() == id)
            .ok_or_else(|| {
                debug!("{} {} not found", T::KIND, id);
                StoreError::not_found(T::KIND, id)
            })
    }
}

#[async_trait]
impl<T: Entity> Repository<T> for FixtureStore<T> {
    async fn get_all(&self) -> StoreResult<Vec<T>> {
        self.latency.pause().await;
        Ok(self.read()?.clone())
    }

    async fn get_by_id(&self, id: Id) -> StoreResult<T> {
        self.latency.pause().await;
        find_by_id(&self.read()?, id)
    }

    async fn create(&self, mut record: T) -> StoreResult<T> {
        self.latency.pause().await;
        let mut data = self.write()?;
        let id = next_id(&data)?;
        record.set_id(id);
        data.push(record.clone());
        info!("Created {} {}", T::KIND, id);
        Ok(record)
    }

    async fn update(&self, id: Id, patch: T::Patch) -> StoreResult<T> {
        self.latency.pause().await;
        let mut data = self.write()?;
        let index = Self::position(&data, id)?;
        data[index].apply(patch);
        info!("Updated {} {}", T::KIND, id);
        Ok(data[index].clone())
    }

    async fn delete(&self, id: Id) -> StoreResult<T> {
        self.latency.pause().await;
        let mut data = self.write()?;
        let index = Self::position(&data, id)?;
        let removed = data.remove(index);
        info!("Deleted {} {}", T::KIND, id);
        Ok(removed)
    }
}

impl FixtureStore<Product> {
    /// Products in `category` (exact match), insertion order
    pub async fn get_by_category(&self, category: &str) -> StoreResult<Vec<Product>> {
        self.latency.pause().await;
        Ok(self
            .read()?
            .iter()
            .filter(|product| product.category == category)
            .cloned()
            .collect())
    }

    /// Distinct categories in first-seen order
    pub async fn get_categories(&self) -> StoreResult<Vec<String>> {
        self.latency.pause().await;
        let data = self.read()?;
        let mut categories: Vec<String> = Vec::new();
        for product in data.iter() {
            if !categories.contains(&product.category) {
                categories.push(product.category.clone());
            }
        }
        Ok(categories)
    }
}
