//! Demo dataset: the five lots of the original front-end's mock inventory,
//! with expiration dates relative to `today`.

use chrono::{DateTime, Days, NaiveDate, Utc};

use lotkeeper_core::{BatchId, DomainResult, ProductId};
use lotkeeper_inventory::Batch;
use lotkeeper_products::{CreateProduct, Product};

use crate::persistence::{InMemoryPersistence, PersistenceError};

pub const LECHE_ENTERA: ProductId = ProductId::new(1);
pub const JAMON_COCIDO: ProductId = ProductId::new(2);
pub const YOGUR_FRUTILLA: ProductId = ProductId::new(3);
pub const QUESO_CREMOSO: ProductId = ProductId::new(4);

/// (product, sku, name, category)
const PRODUCTS: [(ProductId, &str, &str, &str); 4] = [
    (LECHE_ENTERA, "LAC-001", "Leche Entera", "Lácteos"),
    (JAMON_COCIDO, "FIA-002", "Jamón Cocido", "Fiambres"),
    (YOGUR_FRUTILLA, "LAC-003", "Yogur Frutilla", "Lácteos"),
    (QUESO_CREMOSO, "LAC-004", "Queso Cremoso", "Lácteos"),
];

/// (batch id, product, days from today, quantity)
const BATCHES: [(u64, ProductId, u64, u32); 5] = [
    (101, LECHE_ENTERA, 5, 50),
    (102, JAMON_COCIDO, 15, 120),
    (103, YOGUR_FRUTILLA, 2, 30),
    (104, QUESO_CREMOSO, 60, 200),
    (105, LECHE_ENTERA, 20, 80),
];

/// Build the demo catalog and its batches.
pub fn demo_dataset(today: NaiveDate) -> DomainResult<(Vec<Product>, Vec<Batch>)> {
    let registered_at: DateTime<Utc> = today.and_time(chrono::NaiveTime::MIN).and_utc();

    let products = PRODUCTS
        .iter()
        .map(|(id, sku, name, category)| {
            Product::register(CreateProduct {
                product_id: *id,
                sku: (*sku).to_string(),
                name: (*name).to_string(),
                category: Some((*category).to_string()),
                stock_threshold: None,
                occurred_at: registered_at,
            })
        })
        .collect::<DomainResult<Vec<_>>>()?;

    let batches = BATCHES
        .iter()
        .map(|(id, product_id, days, quantity)| {
            let expires = today.checked_add_days(Days::new(*days)).unwrap_or(NaiveDate::MAX);
            Batch::new(BatchId::new(*id), *product_id, expires, *quantity)
        })
        .collect();

    Ok((products, batches))
}

/// In-memory provider pre-filled with [`demo_dataset`].
pub fn demo_persistence(today: NaiveDate) -> Result<InMemoryPersistence, PersistenceError> {
    let (products, batches) = demo_dataset(today)?;
    InMemoryPersistence::with_data(products, batches)
}
