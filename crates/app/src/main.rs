//! Demo entry point: loads the seeded inventory and logs the FEFO views the
//! presentation layer would render.

use anyhow::Context;

use lotkeeper_auth::{can_modify_products, role_permissions};
use lotkeeper_infra::seed::demo_persistence;
use lotkeeper_infra::{load_inventory, InventoryConfig};

fn main() -> anyhow::Result<()> {
    let config = InventoryConfig::from_env().context("failed to read configuration")?;
    lotkeeper_observability::init(config.log_format);

    // The clock is read here, at the edge; domain queries take `today` explicitly.
    let today = chrono::Local::now().date_naive();

    let permissions: Vec<String> = role_permissions(config.role)
        .iter()
        .map(ToString::to_string)
        .collect();
    tracing::info!(
        role = %config.role,
        ?permissions,
        can_modify_products = can_modify_products(config.role),
        "session role"
    );

    let store = demo_persistence(today).context("failed to seed demo data")?;
    let inventory = load_inventory(&store).context("failed to load inventory")?;

    for row in inventory.inventory_rows(today) {
        let row = serde_json::to_string(&row)?;
        tracing::info!(%row, "inventory");
    }

    let alerts = inventory
        .alert_rows(config.alert_threshold_days, today)
        .context("failed to compute expiration alerts")?;
    tracing::info!(
        threshold_days = config.alert_threshold_days,
        count = alerts.len(),
        "expiration alerts"
    );
    for row in &alerts {
        tracing::warn!(
            batch_id = %row.batch_id,
            product = %row.product_name,
            expires = %row.expiration_date,
            days_left = row.days_until_expiry,
            quantity = row.quantity,
            "batch close to expiry"
        );
    }

    for entry in inventory.low_stock_products(today) {
        tracing::warn!(
            sku = %entry.sku,
            on_hand = entry.on_hand,
            threshold = entry.threshold,
            shortfall = entry.shortfall,
            "product below minimum stock"
        );
    }

    Ok(())
}
