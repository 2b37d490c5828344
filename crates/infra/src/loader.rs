//! Assemble a `BatchInventory` snapshot from a persistence provider.

use lotkeeper_inventory::BatchInventory;

use crate::persistence::{PersistenceError, PersistenceProvider};

/// Load products and batches and validate them into an inventory snapshot.
pub fn load_inventory<P>(provider: &P) -> Result<BatchInventory, PersistenceError>
where
    P: PersistenceProvider + ?Sized,
{
    let products = provider.load_products()?;
    let batches = provider.load_batches()?;
    let (product_count, batch_count) = (products.len(), batches.len());

    let inventory = BatchInventory::new(products, batches).inspect_err(|err| {
        tracing::warn!(error = %err, "stored inventory failed validation");
    })?;

    tracing::info!(
        products = product_count,
        batches = batch_count,
        "inventory loaded"
    );
    Ok(inventory)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use lotkeeper_core::{BatchId, DomainError, ProductId};
    use lotkeeper_inventory::Batch;

    use crate::persistence::InMemoryPersistence;
    use crate::seed::demo_persistence;

    #[test]
    fn loads_seeded_inventory() {
        let today = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let store = demo_persistence(today).unwrap();
        let inventory = load_inventory(&store).unwrap();
        assert_eq!(inventory.products().len(), 4);
        assert_eq!(inventory.batches().len(), 5);
    }

    #[test]
    fn orphan_batches_fail_validation() {
        let store = InMemoryPersistence::new();
        store
            .save_batch(Batch::new(
                BatchId::new(1),
                ProductId::new(42),
                NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
                3,
            ))
            .unwrap();

        let err = load_inventory(&store).unwrap_err();
        assert!(matches!(err, PersistenceError::Domain(DomainError::InvariantViolation(_))));
    }
}
