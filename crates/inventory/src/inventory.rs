//! `BatchInventory`: products plus their batches, answering FEFO queries.

use std::collections::{HashMap, HashSet};

use chrono::NaiveDate;
use serde::Serialize;

use lotkeeper_core::{BatchId, DomainError, DomainResult, ProductId};
use lotkeeper_products::{Product, Sku};

use crate::batch::Batch;
use crate::fefo::{self, fefo_cmp};
use crate::stock::{self, LowStockEntry};

/// A batch joined with its product name, ready for an inventory or alert table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatchRow {
    pub batch_id: BatchId,
    pub product_id: ProductId,
    pub product_name: String,
    pub expiration_date: NaiveDate,
    pub quantity: u32,
    pub code: Option<String>,
    /// Negative once the batch has expired.
    pub days_until_expiry: i64,
}

/// Immutable snapshot of the catalog and its batches.
///
/// Construction validates the cross-collection invariants once; every query
/// afterwards is a pure function of the snapshot and its arguments.
#[derive(Debug, Clone)]
pub struct BatchInventory {
    products: HashMap<ProductId, Product>,
    batches: Vec<Batch>,
}

impl BatchInventory {
    /// Fails with `Conflict` on duplicate batch ids or SKUs, and with
    /// `InvariantViolation` when a batch points at an unknown product.
    pub fn new(
        products: impl IntoIterator<Item = Product>,
        batches: impl IntoIterator<Item = Batch>,
    ) -> DomainResult<Self> {
        let mut by_id: HashMap<ProductId, Product> = HashMap::new();
        let mut skus: HashSet<Sku> = HashSet::new();
        for product in products {
            let id = product.id_typed();
            let sku = product.sku().cloned().ok_or_else(|| {
                DomainError::invariant(format!("product {id} has not been created"))
            })?;
            if by_id.contains_key(&id) {
                return Err(DomainError::conflict(format!("duplicate product id {id}")));
            }
            if !skus.insert(sku.clone()) {
                return Err(DomainError::conflict(format!("duplicate SKU {sku}")));
            }
            by_id.insert(id, product);
        }

        let batches: Vec<Batch> = batches.into_iter().collect();
        let mut seen: HashSet<BatchId> = HashSet::with_capacity(batches.len());
        for batch in &batches {
            if !seen.insert(batch.id_typed()) {
                return Err(DomainError::conflict(format!(
                    "duplicate batch id {}",
                    batch.id_typed()
                )));
            }
            if !by_id.contains_key(&batch.product_id()) {
                return Err(DomainError::invariant(format!(
                    "batch {} references unknown product {}",
                    batch.id_typed(),
                    batch.product_id()
                )));
            }
        }

        tracing::debug!(
            products = by_id.len(),
            batches = batches.len(),
            "batch inventory built"
        );
        Ok(Self {
            products: by_id,
            batches,
        })
    }

    pub fn products(&self) -> &HashMap<ProductId, Product> {
        &self.products
    }

    pub fn product(&self, id: ProductId) -> Option<&Product> {
        self.products.get(&id)
    }

    /// Batches in the order they were supplied.
    pub fn batches(&self) -> &[Batch] {
        &self.batches
    }

    /// All batches, depleted ones included, in FEFO order.
    pub fn fefo_order(&self) -> Vec<Batch> {
        fefo::fefo_order(&self.batches)
    }

    pub fn expiration_alerts(&self, threshold_days: i64, today: NaiveDate) -> DomainResult<Vec<Batch>> {
        fefo::expiration_alerts(&self.batches, threshold_days, today)
    }

    pub fn low_stock_products(&self, today: NaiveDate) -> Vec<LowStockEntry> {
        stock::low_stock_products(&self.products, &self.batches, today)
    }

    /// Stock on hand of active products, FEFO ordered.
    pub fn active_batches(&self) -> Vec<&Batch> {
        self.sorted(|b| {
            !b.is_depleted() && self.product(b.product_id()).is_some_and(Product::is_active)
        })
    }

    /// Non-depleted batches of one product, FEFO ordered.
    pub fn batches_for_product(&self, product_id: ProductId) -> Vec<&Batch> {
        self.sorted(|b| b.product_id() == product_id && !b.is_depleted())
    }

    /// The batch a stock-out of `product_id` should draw from first.
    pub fn next_to_consume(&self, product_id: ProductId) -> Option<&Batch> {
        self.batches
            .iter()
            .filter(|b| b.product_id() == product_id && !b.is_depleted())
            .min_by(|a, b| fefo_cmp(a, b))
    }

    /// Stock on hand as display rows, FEFO ordered.
    ///
    /// Depleted lots and lots of inactive products are left out, as in
    /// [`BatchInventory::active_batches`].
    pub fn inventory_rows(&self, today: NaiveDate) -> Vec<BatchRow> {
        self.active_batches()
            .into_iter()
            .map(|b| self.row(b, today))
            .collect()
    }

    /// Expiration alerts as display rows, most urgent first.
    pub fn alert_rows(&self, threshold_days: i64, today: NaiveDate) -> DomainResult<Vec<BatchRow>> {
        let alerts = self.expiration_alerts(threshold_days, today)?;
        Ok(alerts.iter().map(|b| self.row(b, today)).collect())
    }

    fn sorted(&self, keep: impl Fn(&Batch) -> bool) -> Vec<&Batch> {
        let mut selected: Vec<&Batch> = self.batches.iter().filter(|&b| keep(b)).collect();
        selected.sort_by(|a, b| fefo_cmp(a, b));
        selected
    }

    fn row(&self, batch: &Batch, today: NaiveDate) -> BatchRow {
        BatchRow {
            batch_id: batch.id_typed(),
            product_id: batch.product_id(),
            // Construction guarantees the product exists.
            product_name: self
                .product(batch.product_id())
                .map(|p| p.name().to_string())
                .unwrap_or_default(),
            expiration_date: batch.expiration_date(),
            quantity: batch.quantity(),
            code: batch.code().map(str::to_string),
            days_until_expiry: batch.days_until_expiry(today),
        }
    }
}
