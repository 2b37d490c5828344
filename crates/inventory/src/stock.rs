//! Minimum-stock report: active products whose stock on hand is below their
//! configured threshold.

use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;
use serde::Serialize;

use lotkeeper_core::ProductId;
use lotkeeper_products::Product;

use crate::batch::Batch;

/// One flagged product in the minimum-stock report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LowStockEntry {
    pub product_id: ProductId,
    pub sku: String,
    pub name: String,
    /// Sum of quantities over the product's non-depleted batches.
    pub on_hand: u64,
    pub threshold: u32,
    /// `threshold - on_hand`; always > 0 for a flagged product.
    pub shortfall: u64,
    /// Portion of `on_hand` in batches already past their expiration date.
    /// Reported for purchasing decisions; it does not affect the flag.
    pub expired_on_hand: u64,
}

#[derive(Default)]
struct Tally {
    on_hand: u64,
    expired: u64,
}

/// Flag every ACTIVE product whose stock on hand is strictly below its
/// threshold. Entries come back sorted by product id.
///
/// Batches of unknown or inactive products are ignored, and products with no
/// batches at all count as zero stock.
pub fn low_stock_products(
    products: &HashMap<ProductId, Product>,
    batches: &[Batch],
    today: NaiveDate,
) -> Vec<LowStockEntry> {
    let mut tallies: BTreeMap<ProductId, Tally> = products
        .values()
        .filter(|p| p.is_active())
        .map(|p| (p.id_typed(), Tally::default()))
        .collect();

    for batch in batches.iter().filter(|b| !b.is_depleted()) {
        if let Some(tally) = tallies.get_mut(&batch.product_id()) {
            let quantity = u64::from(batch.quantity());
            tally.on_hand += quantity;
            if batch.is_expired(today) {
                tally.expired += quantity;
            }
        }
    }

    let entries: Vec<LowStockEntry> = tallies
        .into_iter()
        .filter_map(|(product_id, tally)| {
            let product = products.get(&product_id)?;
            let threshold = product.stock_threshold();
            if tally.on_hand >= u64::from(threshold) {
                return None;
            }
            Some(LowStockEntry {
                product_id,
                sku: product.sku().map(ToString::to_string).unwrap_or_default(),
                name: product.name().to_string(),
                on_hand: tally.on_hand,
                threshold,
                shortfall: u64::from(threshold) - tally.on_hand,
                expired_on_hand: tally.expired,
            })
        })
        .collect();

    tracing::debug!(
        %today,
        products = products.len(),
        flagged = entries.len(),
        "low stock report computed"
    );
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use lotkeeper_core::{Aggregate, BatchId};
    use lotkeeper_products::{CreateProduct, DeactivateProduct, ProductCommand};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn product(id: u64, sku: &str, threshold: u32) -> Product {
        Product::register(CreateProduct {
            product_id: ProductId::new(id),
            sku: sku.to_string(),
            name: format!("Product {id}"),
            category: None,
            stock_threshold: Some(threshold),
            occurred_at: Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
        })
        .unwrap()
    }

    fn deactivated(mut product: Product) -> Product {
        let cmd = ProductCommand::DeactivateProduct(DeactivateProduct {
            product_id: product.id_typed(),
            occurred_at: Utc.with_ymd_and_hms(2025, 1, 2, 0, 0, 0).unwrap(),
        });
        let events = product.handle(&cmd).unwrap();
        product.apply(&events[0]);
        product
    }

    fn catalog(products: Vec<Product>) -> HashMap<ProductId, Product> {
        products.into_iter().map(|p| (p.id_typed(), p)).collect()
    }

    fn batch(id: u64, product: u64, expires: NaiveDate, quantity: u32) -> Batch {
        Batch::new(BatchId::new(id), ProductId::new(product), expires, quantity)
    }

    #[test]
    fn flags_products_strictly_below_threshold() {
        let products = catalog(vec![product(1, "A", 100), product(2, "B", 50), product(3, "C", 60)]);
        let batches = vec![
            batch(1, 1, date(2025, 2, 1), 60),
            batch(2, 1, date(2025, 3, 1), 30),
            batch(3, 2, date(2025, 2, 1), 50),
            batch(4, 3, date(2025, 2, 1), 59),
        ];

        let report = low_stock_products(&products, &batches, date(2025, 1, 1));
        let flagged: Vec<(u64, u64, u64)> = report
            .iter()
            .map(|e| (e.product_id.get(), e.on_hand, e.shortfall))
            .collect();
        // Product 2 sits exactly on its threshold and is not flagged.
        assert_eq!(flagged, vec![(1, 90, 10), (3, 59, 1)]);
    }

    #[test]
    fn products_without_batches_have_zero_stock() {
        let products = catalog(vec![product(7, "Z", 10)]);
        let report = low_stock_products(&products, &[], date(2025, 1, 1));
        assert_eq!(report.len(), 1);
        assert_eq!(report[0].on_hand, 0);
        assert_eq!(report[0].shortfall, 10);
        assert_eq!(report[0].sku, "Z");
    }

    #[test]
    fn zero_threshold_never_flags() {
        let products = catalog(vec![product(1, "A", 0)]);
        assert!(low_stock_products(&products, &[], date(2025, 1, 1)).is_empty());
    }

    #[test]
    fn inactive_products_are_excluded() {
        let products = catalog(vec![deactivated(product(1, "A", 100))]);
        let report = low_stock_products(&products, &[batch(1, 1, date(2025, 2, 1), 1)], date(2025, 1, 1));
        assert!(report.is_empty());
    }

    #[test]
    fn expired_stock_counts_but_is_reported() {
        let products = catalog(vec![product(1, "A", 100)]);
        let batches = vec![
            batch(1, 1, date(2024, 12, 20), 20),
            batch(2, 1, date(2025, 1, 1), 30),
            batch(3, 1, date(2024, 12, 1), 0),
        ];
        let report = low_stock_products(&products, &batches, date(2025, 1, 1));
        assert_eq!(report[0].on_hand, 50);
        assert_eq!(report[0].expired_on_hand, 20);
    }

    #[test]
    fn batches_of_unknown_products_are_ignored() {
        let products = catalog(vec![product(1, "A", 10)]);
        let batches = vec![batch(1, 99, date(2025, 2, 1), 1000)];
        let report = low_stock_products(&products, &batches, date(2025, 1, 1));
        assert_eq!(report[0].on_hand, 0);
    }
}
