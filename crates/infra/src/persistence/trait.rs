use std::sync::Arc;

use thiserror::Error;

use lotkeeper_core::DomainError;
use lotkeeper_inventory::Batch;
use lotkeeper_products::Product;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PersistenceError {
    /// The backing store could not be reached or is in a broken state.
    #[error("persistence unavailable: {0}")]
    Unavailable(String),

    /// Stored data violates a domain rule.
    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// Loads and saves the catalog and its batches.
///
/// Implementations are synchronous and must be shareable across threads.
pub trait PersistenceProvider: Send + Sync {
    fn load_products(&self) -> Result<Vec<Product>, PersistenceError>;

    fn load_batches(&self) -> Result<Vec<Batch>, PersistenceError>;

    /// Insert or replace a product by id.
    fn save_product(&self, product: Product) -> Result<(), PersistenceError>;

    /// Insert or replace a batch by id.
    fn save_batch(&self, batch: Batch) -> Result<(), PersistenceError>;
}

impl<P> PersistenceProvider for Arc<P>
where
    P: PersistenceProvider + ?Sized,
{
    fn load_products(&self) -> Result<Vec<Product>, PersistenceError> {
        (**self).load_products()
    }

    fn load_batches(&self) -> Result<Vec<Batch>, PersistenceError> {
        (**self).load_batches()
    }

    fn save_product(&self, product: Product) -> Result<(), PersistenceError> {
        (**self).save_product(product)
    }

    fn save_batch(&self, batch: Batch) -> Result<(), PersistenceError> {
        (**self).save_batch(batch)
    }
}
