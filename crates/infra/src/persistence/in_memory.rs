use std::collections::BTreeMap;
use std::sync::RwLock;

use lotkeeper_core::{BatchId, DomainError, ProductId};
use lotkeeper_inventory::Batch;
use lotkeeper_products::Product;

use super::r#trait::{PersistenceError, PersistenceProvider};

/// In-memory provider for tests, demos and the seeded binary.
///
/// Loads return records ordered by id.
#[derive(Debug, Default)]
pub struct InMemoryPersistence {
    products: RwLock<BTreeMap<ProductId, Product>>,
    batches: RwLock<BTreeMap<BatchId, Batch>>,
}

impl InMemoryPersistence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a provider pre-filled with the given records.
    pub fn with_data(
        products: impl IntoIterator<Item = Product>,
        batches: impl IntoIterator<Item = Batch>,
    ) -> Result<Self, PersistenceError> {
        let store = Self::new();
        for product in products {
            store.save_product(product)?;
        }
        for batch in batches {
            store.save_batch(batch)?;
        }
        Ok(store)
    }
}

fn poisoned(what: &str) -> PersistenceError {
    PersistenceError::Unavailable(format!("{what} lock poisoned"))
}

impl PersistenceProvider for InMemoryPersistence {
    fn load_products(&self) -> Result<Vec<Product>, PersistenceError> {
        let map = self.products.read().map_err(|_| poisoned("products"))?;
        Ok(map.values().cloned().collect())
    }

    fn load_batches(&self) -> Result<Vec<Batch>, PersistenceError> {
        let map = self.batches.read().map_err(|_| poisoned("batches"))?;
        Ok(map.values().cloned().collect())
    }

    fn save_product(&self, product: Product) -> Result<(), PersistenceError> {
        let id = product.id_typed();
        let Some(sku) = product.sku().cloned() else {
            return Err(DomainError::invariant(format!("product {id} has not been created")).into());
        };

        let mut map = self.products.write().map_err(|_| poisoned("products"))?;
        if let Some(other) = map
            .values()
            .find(|p| p.id_typed() != id && p.sku() == Some(&sku))
        {
            return Err(DomainError::conflict(format!(
                "SKU {sku} already belongs to product {}",
                other.id_typed()
            ))
            .into());
        }
        map.insert(id, product);
        tracing::debug!(%id, %sku, "product saved");
        Ok(())
    }

    fn save_batch(&self, batch: Batch) -> Result<(), PersistenceError> {
        let id = batch.id_typed();
        let mut map = self.batches.write().map_err(|_| poisoned("batches"))?;
        map.insert(id, batch);
        tracing::debug!(%id, "batch saved");
        Ok(())
    }
}
